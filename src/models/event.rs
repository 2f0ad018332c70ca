//! Instruction-event records consumed from the external bytecode walker.
//!
//! The walker decodes class files and dumps, per class, the declared
//! hierarchy plus a flat event stream per method in program order. The core
//! never touches raw bytecode; a class the walker cannot decode simply never
//! reaches the engine.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
/// Field-access opcode kinds as reported by the walker.
pub enum FieldOp {
    GetStatic,
    PutStatic,
    GetField,
    PutField,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
/// One unit of a method body's sequential representation.
pub enum InstructionEvent {
    /// Source line marker; updates the scan's current line.
    Line { number: u32 },
    /// NEW-style type allocation of `type_name` (JVM internal form).
    Alloc { type_name: String },
    /// Invocation of `owner.name` (owner in JVM internal form).
    Invoke { owner: String, name: String },
    /// Field access on `owner.name`.
    Field {
        op: FieldOp,
        owner: String,
        name: String,
    },
    /// End of the method body; closes the scan.
    MethodEnd,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// Event stream for one declared method.
pub struct MethodEvents {
    pub name: String,
    #[serde(default)]
    pub events: Vec<InstructionEvent>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
/// Per-class record: declared hierarchy plus method event streams.
pub struct ClassEvents {
    /// Qualified name in JVM internal (slash) form.
    pub class_name: String,
    #[serde(default)]
    pub superclass: String,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodEvents>,
}

impl ClassEvents {
    /// Simple (unqualified) class name, inner-class suffix included.
    pub fn simple_name(&self) -> &str {
        self.class_name
            .rsplit('/')
            .next()
            .unwrap_or(&self.class_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let json = r#"{
            "class_name": "com/app/widgets/Gauge",
            "superclass": "android/view/View",
            "interfaces": [],
            "methods": [
                {"name": "onDraw", "events": [
                    {"line": {"number": 10}},
                    {"alloc": {"type_name": "java/lang/StringBuilder"}},
                    {"invoke": {"owner": "java/lang/String", "name": "format"}},
                    {"field": {"op": "getstatic", "owner": "java/lang/System", "name": "out"}},
                    "method_end"
                ]}
            ]
        }"#;
        let ce: ClassEvents = serde_json::from_str(json).unwrap();
        assert_eq!(ce.simple_name(), "Gauge");
        assert_eq!(ce.methods.len(), 1);
        assert_eq!(ce.methods[0].events.len(), 5);
        match &ce.methods[0].events[1] {
            InstructionEvent::Alloc { type_name } => {
                assert_eq!(type_name, "java/lang/StringBuilder")
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let ce: ClassEvents =
            serde_json::from_str(r#"{"class_name": "com/app/Thing"}"#).unwrap();
        assert!(ce.superclass.is_empty());
        assert!(ce.methods.is_empty());
    }
}
