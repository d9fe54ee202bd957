//! Add/edit student form.

use super::{escape_html, layout};
use crate::models::student::Student;

pub const ADD_TITLE: &str = "Add Student";
pub const EDIT_TITLE: &str = "Edit Student";

/// Blank form posting to `/students`.
pub fn render_add() -> String {
    render(None, "/students", ADD_TITLE)
}

/// Pre-filled form posting back through the `_method=PUT` override.
pub fn render_edit(student: &Student) -> String {
    let action = format!("/students/{}?_method=PUT", student.id);
    render(Some(student), &action, EDIT_TITLE)
}

fn render(student: Option<&Student>, action: &str, title: &str) -> String {
    let text = |value: Option<&String>| value.map(|v| escape_html(v)).unwrap_or_default();
    let number = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();

    let body = format!(
        r#"    <form class="student-form" method="POST" action="{action}">
      <label>Name <input type="text" name="name" value="{name}" required/></label>
      <label>Roll <input type="text" name="roll" value="{roll}" required/></label>
      <label>Class <input type="text" name="className" value="{class_name}"/></label>
      <fieldset class="marks">
        <legend>Marks</legend>
        <label>Math <input class="mark-input" type="number" step="any" id="math" name="math" value="{math}"/></label>
        <label>Science <input class="mark-input" type="number" step="any" id="science" name="science" value="{science}"/></label>
        <label>English <input class="mark-input" type="number" step="any" id="english" name="english" value="{english}"/></label>
      </fieldset>
      <label>Total <input type="text" id="total" value="{total}" readonly/></label>
      <label>Percent <input type="text" id="percent" value="{percent}" readonly/></label>
      <button type="submit">Save</button>
      <a href="/">Cancel</a>
    </form>
"#,
        action = escape_html(action),
        name = text(student.map(|s| &s.name)),
        roll = text(student.map(|s| &s.roll)),
        class_name = text(student.map(|s| &s.class_name)),
        math = number(student.map(|s| s.marks.math)),
        science = number(student.map(|s| s.marks.science)),
        english = number(student.map(|s| s.marks.english)),
        total = number(student.map(|s| s.total)),
        percent = student.map(|s| format!("{:.2}", s.percent)).unwrap_or_default(),
    );

    layout(title, &body)
}
