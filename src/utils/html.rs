// Renderização da tabela HTML de usuários (GET /all e GET /{id})

use crate::models::User;

const TABLE_HEAD: &str = r#"
      <style>
        #users {
          font-family: Arial, Helvetica, sans-serif;
          border-collapse: collapse;
          width: 100%;
        }
        #users td, #users th {
          border: 1px solid #ddd;
          padding: 8px;
        }
        #users tr:nth-child(even){background-color: #f2f2f2;}
        #users tr:hover {background-color: #ddd;}
        #users th {
          padding-top: 12px;
          padding-bottom: 12px;
          text-align: left;
          background-color: #04AA6D;
          color: white;
        }
      </style>
      <table id='users'>
        <tr>
          <th>Id</th>
          <th>Name</th>
          <th>Email</th>
        </tr>
"#;

const TABLE_TAIL: &str = "</table>";

/// Placeholder cell used when a lookup by id finds nothing
const EMPTY_CELL: &str = "-";

/// Escapa texto livre antes de colocá-lo dentro de uma célula
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_row(html: &mut String, id: &str, name: &str, email: &str) {
    html.push_str("<tr>");
    for cell in [id, name, email] {
        html.push_str("<td>");
        html.push_str(cell);
        html.push_str("</td>");
    }
    html.push_str("</tr>");
}

/// Renders every user as one table row, in the order given.
pub fn render_users_table<'a, I>(users: I) -> String
where
    I: IntoIterator<Item = &'a User>,
{
    let mut html = String::from(TABLE_HEAD);
    for user in users {
        push_row(
            &mut html,
            &user.id.to_string(),
            &escape(&user.name),
            &escape(&user.email),
        );
    }
    html.push_str(TABLE_TAIL);
    html
}

/// Renders a single-row table; `None` yields a row of `-` cells.
pub fn render_user_lookup(user: Option<&User>) -> String {
    match user {
        Some(user) => render_users_table(std::iter::once(user)),
        None => {
            let mut html = String::from(TABLE_HEAD);
            push_row(&mut html, EMPTY_CELL, EMPTY_CELL, EMPTY_CELL);
            html.push_str(TABLE_TAIL);
            html
        }
    }
}
