use maud::{html, Markup, DOCTYPE};

pub fn page_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (STYLE) }
            }
            body {
                header {
                    h3 { "Suburb Properties" }
                    nav {
                        ul {
                            li { a href="/" { "Search" } }
                            li { a href="/map" { "Map" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
header { display: flex; align-items: center; justify-content: space-between;
         padding: 0.5rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main { max-width: 1100px; margin: 1rem auto; padding: 0 1rem; }
table { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
th, td { border: 1px solid #ddd; padding: 6px 8px; text-align: left; }
th { background: #f4f4f4; }
tr:nth-child(even) { background: #fafafa; }
form.search { display: flex; gap: 10px; margin: 1rem 0; }
form.search input[type=text] { padding: 8px; font-size: 16px; flex: 1; max-width: 320px; }
form.search button { padding: 8px 16px; font-size: 16px; cursor: pointer; }
iframe.map { width: 100%; height: 700px; border: 1px solid #ddd; margin-top: 1rem; }
td.description { max-width: 280px; }
"#;
