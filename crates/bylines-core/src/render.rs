//! Renders the view model into the contributors Markdown document.

use crate::model::ViewModel;

const TITLE: &str = "# Contributors";
const INTRO: &str = "Here is a list of the contributors who have helped creating this book:";

/// Render the contributors page.
///
/// One bullet per model entry, in model order, each a mailto link. Lines are
/// joined with a single newline and no trailing newline is appended. Names
/// and emails are not escaped, so a name containing `]`, `(` or `)` would
/// corrupt the link syntax.
pub fn render_contributors(model: &ViewModel) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        String::new(),
        INTRO.to_string(),
        String::new(),
    ];
    for committer in model.iter() {
        lines.push(format!("* [{}](mailto:{})", committer.name, committer.email));
    }
    lines.join("\n")
}
