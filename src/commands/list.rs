use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::{Output, OutputMode, text};

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let profiles = ctx.store.list()?;

    match render(&ctx.output, &profiles)? {
        Some(rendered) => text::print_line(&rendered),
        None => Ok(()),
    }
}

/// One name per line in text mode, a JSON array otherwise.
/// An empty text listing prints nothing.
pub fn render(output: &Output, profiles: &[String]) -> AppResult<Option<String>> {
    if output.mode() == OutputMode::Text && profiles.is_empty() {
        return Ok(None);
    }

    output.render(&profiles.join("\n"), &profiles).map(Some)
}
