//! Error rendering for the terminal.

use snapmood_core::SnapmoodError;

/// Renders an error for stderr.
///
/// Domain errors anywhere in the chain are shown as their user-facing notice
/// followed by the technical detail; anything else prints the chain as is.
pub fn render_error(err: &anyhow::Error) -> String {
    match err
        .chain()
        .find_map(|cause| cause.downcast_ref::<SnapmoodError>())
    {
        Some(domain) => {
            let notice = domain.notice();
            format!(
                "{}: {}\n  ({}: {:#})",
                notice.title(),
                notice.message(),
                notice.key(),
                err
            )
        }
        None => format!("Error: {:#}", err),
    }
}
