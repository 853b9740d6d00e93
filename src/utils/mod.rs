pub mod build_info;
pub mod paths;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "idikhar_wallet=info";

/// Installs the global tracing subscriber. `RUST_LOG` adds to the default
/// `idikhar_wallet=info` directive. Called once through [`crate::init`].
pub(crate) fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
        filter = filter.add_directive(directive);
    }
    // Another subscriber may already be installed by an embedding host.
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
