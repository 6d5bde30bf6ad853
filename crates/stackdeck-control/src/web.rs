use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

/// `GET /`, the stack list page. Pure function of the configured list; no
/// remote calls are made to render it.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.config.stacks))
}

fn render_index(stacks: &[String]) -> String {
    let mut rows = String::new();
    for name in stacks {
        let name = escape_html(name);
        rows.push_str(&format!(
            "      <li>\n        <span>{name}</span>\n        <form method=\"post\" action=\"/start/{name}\"><button>Start</button></form>\n        <form method=\"post\" action=\"/stop/{name}\"><button>Stop</button></form>\n      </li>\n"
        ));
    }

    format!(
        "<!doctype html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>Stackdeck</title>\n    <style>\n      body {{ font-family: sans-serif; max-width: 32rem; margin: 2rem auto; }}\n      li {{ display: flex; gap: 0.5rem; align-items: center; margin: 0.5rem 0; }}\n      li span {{ flex: 1; }}\n      ul {{ list-style: none; padding: 0; }}\n    </style>\n  </head>\n  <body>\n    <h1>Stacks</h1>\n    <ul>\n{rows}    </ul>\n  </body>\n</html>\n"
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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
