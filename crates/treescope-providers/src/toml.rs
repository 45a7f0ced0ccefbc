use crate::{REPR_BUDGET, clip, clip_lines, partition_keys};
use std::rc::Rc;
use toml::Value;
use treescope_types::{Category, Classified, EntityHandle, EntityKind, Error, Inspect, Result};

/// Cursor into a shared TOML document, same shape as the JSON cursor.
struct TomlCursor {
    doc: Rc<Value>,
    path: Vec<Step>,
}

#[derive(Clone)]
enum Step {
    Key(String),
    Index(usize),
}

impl TomlCursor {
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

/// Inspector over `toml::Value` documents.
pub struct TomlInspector;

impl TomlInspector {
    pub fn load_str(text: &str) -> crate::Result<EntityHandle> {
        let doc: Value = toml::from_str(text).map_err(|e| crate::Error::Parse(e.to_string()))?;
        Ok(EntityHandle::new(TomlCursor {
            doc: Rc::new(doc),
            path: Vec::new(),
        }))
    }

    fn cursor<'a>(&self, handle: &'a EntityHandle) -> Result<&'a TomlCursor> {
        handle.downcast::<TomlCursor>().ok_or(Error::ForeignHandle)
    }
}

impl Inspect for TomlInspector {
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
        Ok(EntityHandle::new(TomlCursor {
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
        let mut out = String::new();
        pretty(value, 0, &mut out);
        clip_lines(&out, max_lines)
    }
}

fn classify_value(value: &Value) -> Classified {
    match value {
        Value::Boolean(b) => Classified::scalar(EntityKind::Bool, "bool", b.to_string()),
        Value::Integer(n) => Classified::scalar(EntityKind::Int, "int", n.to_string()),
        Value::Float(n) => Classified::scalar(EntityKind::Float, "float", n.to_string()),
        Value::Datetime(dt) => Classified::scalar(EntityKind::Str, "datetime", dt.to_string()),
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
            repr: clip(&one_line(value), REPR_BUDGET),
            len: Some(items.len()),
            categories: vec![(
                Category::Indexed,
                (0..items.len()).map(|i| i.to_string()).collect(),
            )],
        },
        Value::Table(table) => {
            // Sort explicitly; the toml map's iteration order depends on
            // crate features and the engine requires a deterministic one.
            let mut keys: Vec<&str> = table.keys().map(String::as_str).collect();
            keys.sort_unstable();
            let (keyed, private) = partition_keys(keys.into_iter());
            let mut categories = vec![(Category::Keyed, keyed)];
            if !private.is_empty() {
                categories.push((Category::Private, private));
            }
            Classified {
                kind: EntityKind::Map,
                type_label: "table".to_string(),
                repr: clip(&one_line(value), REPR_BUDGET),
                len: Some(table.len()),
                categories,
            }
        }
    }
}

fn one_line(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{:?}", s),
        Value::Integer(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(dt) => dt.to_string(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(one_line).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Table(table) => {
            let inner: Vec<String> = table
                .iter()
                .map(|(k, v)| format!("{} = {}", k, one_line(v)))
                .collect();
            format!("{{ {} }}", inner.join(", "))
        }
    }
}

fn pretty(value: &Value, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    match value {
        Value::Array(items) => {
            out.push_str("[\n");
            for item in items {
                out.push_str(&pad);
                out.push_str("  ");
                pretty(item, indent + 1, out);
                out.push_str(",\n");
            }
            out.push_str(&pad);
            out.push(']');
        }
        Value::Table(table) => {
            out.push_str("{\n");
            for (key, item) in table {
                out.push_str(&pad);
                out.push_str("  ");
                out.push_str(key);
                out.push_str(" = ");
                pretty(item, indent + 1, out);
                out.push('\n');
            }
            out.push_str(&pad);
            out.push('}');
        }
        other => out.push_str(&one_line(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(text: &str) -> EntityHandle {
        TomlInspector::load_str(text).expect("valid document")
    }

    #[test]
    fn classifies_table_with_sorted_keys() {
        let handle = root("b = 1\na = 2\n_meta = 3\n");
        let classified = TomlInspector.classify(&handle).unwrap();

        assert_eq!(classified.kind, EntityKind::Map);
        assert_eq!(classified.type_label, "table");
        assert_eq!(classified.categories[0].1, vec!["a", "b"]);
        assert_eq!(classified.categories[1].1, vec!["_meta"]);
    }

    #[test]
    fn resolve_walks_array_of_tables() {
        let handle = root("[[server]]\nhost = \"a\"\n[[server]]\nhost = \"b\"\n");
        let servers = TomlInspector.resolve(&handle, Category::Keyed, "server").unwrap();
        let classified = TomlInspector.classify(&servers).unwrap();
        assert_eq!(classified.kind, EntityKind::Seq);
        assert_eq!(classified.len, Some(2));

        let second = TomlInspector.resolve(&servers, Category::Indexed, "1").unwrap();
        let host = TomlInspector.resolve(&second, Category::Keyed, "host").unwrap();
        assert_eq!(TomlInspector.classify(&host).unwrap().repr, "\"b\"");
    }

    #[test]
    fn resolve_missing_key_is_access_error() {
        let handle = root("a = 1\n");
        let err = TomlInspector.resolve(&handle, Category::Keyed, "nope").unwrap_err();
        assert!(matches!(err, Error::Access(_)));
    }

    #[test]
    fn datetime_is_a_labeled_scalar() {
        let handle = root("born = 1979-05-27T07:32:00Z\n");
        let born = TomlInspector.resolve(&handle, Category::Keyed, "born").unwrap();
        let classified = TomlInspector.classify(&born).unwrap();
        assert_eq!(classified.kind, EntityKind::Str);
        assert_eq!(classified.type_label, "datetime");
    }

    #[test]
    fn preview_is_line_budgeted() {
        let handle = root("a = 1\nb = 2\nc = 3\nd = 4\n");
        let preview = TomlInspector.preview(&handle, 3);
        assert_eq!(preview.lines().count(), 3);
    }
}
