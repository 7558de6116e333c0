use super::cfg::CorpusCfg;
use super::Document;
use serde_json::Value;
use std::path::Path;

// ids may be strings or numbers
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// lines that are not json objects or lack an id are logged and skipped
pub fn parse_jsonlines(path: &Path, text: &str, cfg: &CorpusCfg) -> Vec<Document> {
    let mut docs = vec![];
    let path_string = path.to_string_lossy();
    for (n, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(value) => {
                let id = match field_text(&value[cfg.id_field.as_str()]) {
                    Some(id) => id,
                    None => {
                        log::warn!("{}:{}: missing id field {}", path_string, n + 1, cfg.id_field);
                        continue;
                    }
                };
                let content: Vec<String> = cfg.fields
                    .iter()
                    .filter_map(|f| field_text(&value[f.as_str()]))
                    .collect();
                docs.push(Document::new(id, content.join(" ")));
            }
            Err(e) => log::warn!("{}:{}: {}", path_string, n + 1, e),
        }
    }
    docs
}
