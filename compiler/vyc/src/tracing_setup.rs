use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=vy_lexer=debug` or `RUST_LOG=vy_lexer_core=trace`.
/// Spans are rendered as an indented tree on stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(tree).init();
        }
    });
}
