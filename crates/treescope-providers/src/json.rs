use crate::{REPR_BUDGET, clip, clip_lines, partition_keys};
use serde_json::Value;
use std::rc::Rc;
use treescope_types::{Category, Classified, EntityHandle, EntityKind, Error, Inspect, Result};

/// Cursor into a shared JSON document: the root plus the access path that
/// reaches this entity. Resolving a child extends the path; nothing is
/// copied out of the document.
struct JsonCursor {
    doc: Rc<Value>,
    path: Vec<Step>,
}

#[derive(Clone)]
enum Step {
    Key(String),
    Index(usize),
}

impl JsonCursor {
    fn value(&self) -> Result<&Value> {
        let mut current: &Value = &self.doc;
        for step in &self.path {
            current = match step {
                Step::Key(key) => current
                    .get(key)
                    .ok_or_else(|| Error::Access(format!("no key {:?}", key)))?,
                Step::Index(idx) => current
                    .get(idx)
                    .ok_or_else(|| Error::Access(format!("index {} out of range", idx)))?,
            };
        }
        Ok(current)
    }
}

/// Inspector over `serde_json::Value` documents.
pub struct JsonInspector;

impl JsonInspector {
    /// Parse `text` and return the root handle.
    pub fn load_str(text: &str) -> crate::Result<EntityHandle> {
        let doc: Value =
            serde_json::from_str(text).map_err(|e| crate::Error::Parse(e.to_string()))?;
        Ok(EntityHandle::new(JsonCursor {
            doc: Rc::new(doc),
            path: Vec::new(),
        }))
    }

    fn cursor<'a>(&self, handle: &'a EntityHandle) -> Result<&'a JsonCursor> {
        handle.downcast::<JsonCursor>().ok_or(Error::ForeignHandle)
    }
}

impl Inspect for JsonInspector {
    fn classify(&self, handle: &EntityHandle) -> Result<Classified> {
        let value = self.cursor(handle)?.value()?;
        Ok(classify_value(value))
    }

    fn resolve(&self, handle: &EntityHandle, category: Category, key: &str) -> Result<EntityHandle> {
        let cursor = self.cursor(handle)?;
        let parent = cursor.value()?;

        let step = match category {
            Category::Indexed => {
                let idx: usize = key
                    .parse()
                    .map_err(|_| Error::Access(format!("bad index {:?}", key)))?;
                if parent.get(idx).is_none() {
                    return Err(Error::Access(format!("index {} out of range", idx)));
                }
                Step::Index(idx)
            }
            _ => {
                if parent.get(key).is_none() {
                    return Err(Error::Access(format!("no key {:?}", key)));
                }
                Step::Key(key.to_string())
            }
        };

        let mut path = cursor.path.clone();
        path.push(step);
        Ok(EntityHandle::new(JsonCursor {
            doc: cursor.doc.clone(),
            path,
        }))
    }

    fn preview(&self, handle: &EntityHandle, max_lines: usize) -> String {
        let Ok(cursor) = self.cursor(handle) else {
            return "<unreadable>".to_string();
        };
        let Ok(value) = cursor.value() else {
            return "<unreadable>".to_string();
        };
        let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| "<unreadable>".to_string());
        clip_lines(&pretty, max_lines)
    }
}

fn classify_value(value: &Value) -> Classified {
    match value {
        Value::Null => Classified::scalar(EntityKind::Null, "null", "null"),
        Value::Bool(b) => Classified::scalar(EntityKind::Bool, "bool", b.to_string()),
        Value::Number(n) => {
            let kind = if n.is_f64() { EntityKind::Float } else { EntityKind::Int };
            let label = if kind == EntityKind::Int { "int" } else { "float" };
            Classified::scalar(kind, label, n.to_string())
        }
        Value::String(s) => Classified {
            kind: EntityKind::Str,
            type_label: "str".to_string(),
            repr: clip(&format!("{:?}", s), REPR_BUDGET),
            len: Some(s.chars().count()),
            categories: Vec::new(),
        },
        Value::Array(items) => Classified {
            kind: EntityKind::Seq,
            type_label: "seq".to_string(),
            repr: clip(&compact(value), REPR_BUDGET),
            len: Some(items.len()),
            categories: vec![(
                Category::Indexed,
                (0..items.len()).map(|i| i.to_string()).collect(),
            )],
        },
        Value::Object(map) => {
            // serde_json objects iterate in lexicographic key order, which
            // is the canonical order the engine expects for names.
            let (keyed, private) = partition_keys(map.keys().map(String::as_str));
            let mut categories = vec![(Category::Keyed, keyed)];
            if !private.is_empty() {
                categories.push((Category::Private, private));
            }
            Classified {
                kind: EntityKind::Map,
                type_label: "map".to_string(),
                repr: clip(&compact(value), REPR_BUDGET),
                len: Some(map.len()),
                categories,
            }
        }
    }
}

fn compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<unreadable>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(text: &str) -> EntityHandle {
        JsonInspector::load_str(text).expect("valid document")
    }

    #[test]
    fn classifies_map_with_private_partition() {
        let handle = root(r#"{"b": 1, "a": 2, "_meta": {}}"#);
        let classified = JsonInspector.classify(&handle).unwrap();

        assert_eq!(classified.kind, EntityKind::Map);
        assert_eq!(classified.len, Some(3));
        assert_eq!(classified.categories.len(), 2);
        assert_eq!(classified.categories[0].0, Category::Keyed);
        assert_eq!(classified.categories[0].1, vec!["a", "b"]);
        assert_eq!(classified.categories[1].0, Category::Private);
        assert_eq!(classified.categories[1].1, vec!["_meta"]);
    }

    #[test]
    fn classifies_sequence_in_declaration_order() {
        let handle = root(r#"[10, "x", null]"#);
        let classified = JsonInspector.classify(&handle).unwrap();

        assert_eq!(classified.kind, EntityKind::Seq);
        assert_eq!(classified.categories[0].0, Category::Indexed);
        assert_eq!(classified.categories[0].1, vec!["0", "1", "2"]);
    }

    #[test]
    fn resolve_walks_nested_path() {
        let handle = root(r#"{"servers": [{"host": "a"}, {"host": "b"}]}"#);
        let servers = JsonInspector.resolve(&handle, Category::Keyed, "servers").unwrap();
        let second = JsonInspector.resolve(&servers, Category::Indexed, "1").unwrap();
        let host = JsonInspector.resolve(&second, Category::Keyed, "host").unwrap();

        let classified = JsonInspector.classify(&host).unwrap();
        assert_eq!(classified.kind, EntityKind::Str);
        assert_eq!(classified.repr, "\"b\"");
    }

    #[test]
    fn resolve_missing_key_is_access_error() {
        let handle = root(r#"{"a": 1}"#);
        let err = JsonInspector.resolve(&handle, Category::Keyed, "nope").unwrap_err();
        assert!(matches!(err, Error::Access(_)));
    }

    #[test]
    fn resolve_out_of_range_index_is_access_error() {
        let handle = root("[1]");
        let err = JsonInspector.resolve(&handle, Category::Indexed, "5").unwrap_err();
        assert!(matches!(err, Error::Access(_)));
    }

    #[test]
    fn preview_respects_line_budget() {
        let handle = root(r#"{"a": 1, "b": 2, "c": 3, "d": 4}"#);
        let preview = JsonInspector.preview(&handle, 3);
        assert_eq!(preview.lines().count(), 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn string_length_counts_chars() {
        let handle = root(r#""héllo""#);
        let classified = JsonInspector.classify(&handle).unwrap();
        assert_eq!(classified.len, Some(5));
    }
}
