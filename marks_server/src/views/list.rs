//! All-students page with the search box.

use super::{escape_html, layout};
use crate::models::student::Student;

pub const TITLE: &str = "All Students";

pub fn render(students: &[Student], q: &str) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        r#"    <form class="search" method="GET" action="/">
      <input type="text" name="q" value="{}" placeholder="Search by name, roll or class"/>
      <button type="submit">Search</button>
      <a href="/">Clear</a>
    </form>
"#,
        escape_html(q)
    ));

    if students.is_empty() {
        body.push_str("    <p class=\"empty\">No students found.</p>\n");
        return layout(TITLE, &body);
    }

    body.push_str(
        r#"    <table class="students">
      <thead>
        <tr><th>Name</th><th>Roll</th><th>Class</th><th>Math</th><th>Science</th><th>English</th><th>Total</th><th>Percent</th><th></th></tr>
      </thead>
      <tbody>
"#,
    );
    for student in students {
        body.push_str(&row(student));
    }
    body.push_str("      </tbody>\n    </table>\n");

    layout(TITLE, &body)
}

fn row(s: &Student) -> String {
    format!(
        r#"        <tr>
          <td>{name}</td><td>{roll}</td><td>{class_name}</td>
          <td>{math}</td><td>{science}</td><td>{english}</td>
          <td>{total}</td><td>{percent:.2}%</td>
          <td class="actions">
            <a href="/students/{id}/edit">Edit</a>
            <form method="POST" action="/students/{id}?_method=DELETE" onsubmit="return confirm('Delete this student?');">
              <button type="submit">Delete</button>
            </form>
          </td>
        </tr>
"#,
        id = s.id,
        name = escape_html(&s.name),
        roll = escape_html(&s.roll),
        class_name = escape_html(&s.class_name),
        math = s.marks.math,
        science = s.marks.science,
        english = s.marks.english,
        total = s.total,
        percent = s.percent,
    )
}
