//! In-memory sample entities and an attribute-style inspector for tests.
//!
//! `SampleInspector` exposes `Public`/`Private` categories (split on a
//! leading underscore, names sorted), plus callables and entities whose
//! classification or access fails on purpose.

use std::rc::Rc;
use treescope_types::{Category, Classified, EntityHandle, EntityKind, Error, Inspect, Result};

#[derive(Debug)]
pub enum Sample {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Callable entity: previewed, never entered.
    Func,
    Seq(Vec<Sample>),
    Obj(Vec<(String, Sample)>),
    /// Classification of this entity fails.
    Broken,
    /// Resolving this entity from its parent fails.
    Missing,
}

impl Sample {
    pub fn obj(entries: Vec<(&str, Sample)>) -> Sample {
        Sample::Obj(
            entries
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }

    pub fn str(text: &str) -> Sample {
        Sample::Str(text.to_string())
    }
}

struct SampleCursor {
    root: Rc<Sample>,
    path: Vec<Seg>,
}

#[derive(Clone)]
enum Seg {
    Name(String),
    Index(usize),
}

impl SampleCursor {
    fn value(&self) -> Result<&Sample> {
        let mut current: &Sample = &self.root;
        for seg in &self.path {
            current = match (current, seg) {
                (Sample::Obj(entries), Seg::Name(name)) => entries
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, v)| v)
                    .ok_or_else(|| Error::Access(format!("no attribute {:?}", name)))?,
                (Sample::Seq(items), Seg::Index(idx)) => items
                    .get(*idx)
                    .ok_or_else(|| Error::Access(format!("index {} out of range", idx)))?,
                _ => return Err(Error::Access("not a container".to_string())),
            };
        }
        Ok(current)
    }
}

/// Wrap a sample tree as a root handle for `SampleInspector`.
pub fn sample_root(sample: Sample) -> EntityHandle {
    EntityHandle::new(SampleCursor {
        root: Rc::new(sample),
        path: Vec::new(),
    })
}

pub struct SampleInspector;

impl SampleInspector {
    fn cursor<'a>(&self, handle: &'a EntityHandle) -> Result<&'a SampleCursor> {
        handle.downcast::<SampleCursor>().ok_or(Error::ForeignHandle)
    }
}

impl Inspect for SampleInspector {
    fn classify(&self, handle: &EntityHandle) -> Result<Classified> {
        let value = self.cursor(handle)?.value()?;
        match value {
            Sample::Null => Ok(Classified::scalar(EntityKind::Null, "null", "null")),
            Sample::Bool(b) => Ok(Classified::scalar(EntityKind::Bool, "bool", b.to_string())),
            Sample::Int(n) => Ok(Classified::scalar(EntityKind::Int, "int", n.to_string())),
            Sample::Float(n) => Ok(Classified::scalar(EntityKind::Float, "float", n.to_string())),
            Sample::Func => Ok(Classified::scalar(
                EntityKind::Callable,
                "function",
                "<function>",
            )),
            Sample::Str(s) => Ok(Classified {
                kind: EntityKind::Str,
                type_label: "str".to_string(),
                repr: format!("{:?}", s),
                len: Some(s.chars().count()),
                categories: Vec::new(),
            }),
            Sample::Seq(items) => Ok(Classified {
                kind: EntityKind::Seq,
                type_label: "seq".to_string(),
                repr: format!("seq of {}", items.len()),
                len: Some(items.len()),
                categories: vec![(
                    Category::Indexed,
                    (0..items.len()).map(|i| i.to_string()).collect(),
                )],
            }),
            Sample::Obj(entries) => {
                let mut public: Vec<String> = entries
                    .iter()
                    .map(|(n, _)| n.clone())
                    .filter(|n| !n.starts_with('_'))
                    .collect();
                let mut private: Vec<String> = entries
                    .iter()
                    .map(|(n, _)| n.clone())
                    .filter(|n| n.starts_with('_'))
                    .collect();
                public.sort_unstable();
                private.sort_unstable();

                let mut categories = vec![(Category::Public, public)];
                if !private.is_empty() {
                    categories.push((Category::Private, private));
                }
                Ok(Classified {
                    kind: EntityKind::Map,
                    type_label: "object".to_string(),
                    repr: format!("object with {} attributes", entries.len()),
                    len: Some(entries.len()),
                    categories,
                })
            }
            Sample::Broken | Sample::Missing => {
                Err(Error::Inspect("simulated inspection failure".to_string()))
            }
        }
    }

    fn resolve(&self, handle: &EntityHandle, category: Category, key: &str) -> Result<EntityHandle> {
        let cursor = self.cursor(handle)?;
        let parent = cursor.value()?;

        let seg = match (parent, category) {
            (Sample::Seq(items), Category::Indexed) => {
                let idx: usize = key
                    .parse()
                    .map_err(|_| Error::Access(format!("bad index {:?}", key)))?;
                match items.get(idx) {
                    Some(Sample::Missing) | None => {
                        return Err(Error::Access(format!("cannot access [{}]", idx)));
                    }
                    Some(_) => Seg::Index(idx),
                }
            }
            (Sample::Obj(entries), _) => {
                match entries.iter().find(|(n, _)| n == key).map(|(_, v)| v) {
                    Some(Sample::Missing) | None => {
                        return Err(Error::Access(format!("cannot access {:?}", key)));
                    }
                    Some(_) => Seg::Name(key.to_string()),
                }
            }
            _ => return Err(Error::Access("not a container".to_string())),
        };

        let mut path = cursor.path.clone();
        path.push(seg);
        Ok(EntityHandle::new(SampleCursor {
            root: cursor.root.clone(),
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
        render(value, 0, &mut out);
        let lines: Vec<&str> = out.lines().take(max_lines).collect();
        lines.join("\n")
    }
}

fn render(value: &Sample, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    match value {
        Sample::Null => out.push_str("null"),
        Sample::Bool(b) => out.push_str(&b.to_string()),
        Sample::Int(n) => out.push_str(&n.to_string()),
        Sample::Float(n) => out.push_str(&n.to_string()),
        Sample::Str(s) => out.push_str(&format!("{:?}", s)),
        Sample::Func => out.push_str("<function>"),
        Sample::Broken | Sample::Missing => out.push_str("<unreadable>"),
        Sample::Seq(items) => {
            out.push_str("[\n");
            for item in items {
                out.push_str(&pad);
                out.push_str("  ");
                render(item, indent + 1, out);
                out.push('\n');
            }
            out.push_str(&pad);
            out.push(']');
        }
        Sample::Obj(entries) => {
            out.push_str("{\n");
            for (name, item) in entries {
                out.push_str(&pad);
                out.push_str("  ");
                out.push_str(name);
                out.push_str(": ");
                render(item, indent + 1, out);
                out.push('\n');
            }
            out.push_str(&pad);
            out.push('}');
        }
    }
}
