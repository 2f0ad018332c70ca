//! Rule catalog for the instruction scanner.
//!
//! Each rule category maps one instruction-event shape to an `IssueType`.
//! Categories are individually toggleable; a disabled category is skipped
//! before evaluation, not filtered after. Several invocation rules may fire
//! on the same event. An event no rule recognizes is silently unclassified.

use crate::filter;
use crate::models::{FieldOp, IssueType};
use regex::Regex;
use serde::Deserialize;

/// Types considered expensive to construct inside a draw callback.
const COSTLY_ALLOCATIONS: &[&str] = &[
    "java/lang/StringBuilder",
    "java/lang/StringBuffer",
    "java/util/ArrayList",
    "java/util/HashMap",
    "java/util/HashSet",
    "java/util/LinkedList",
    "android/graphics/Paint",
    "android/graphics/Path",
    "android/graphics/Rect",
    "android/graphics/RectF",
    "android/graphics/Matrix",
    "android/graphics/Canvas",
    "android/graphics/Bitmap",
    "java/io/File",
];

/// Any allocation under these namespaces is flagged regardless of type.
const COSTLY_ALLOCATION_PREFIXES: &[&str] = &["java/util/", "java/io/", "java/net/"];

const STRING_METHODS: &[&str] = &["concat", "valueOf", "format"];
const COLLECTION_METHODS: &[&str] = &["add", "remove", "clear", "put"];
const MATH_METHODS: &[&str] = &["pow", "sqrt", "sin", "cos"];

const FILE_IO_OWNERS: &[&str] = &[
    "java/io/FileInputStream",
    "java/io/FileOutputStream",
    "java/io/FileReader",
    "java/io/FileWriter",
    "java/io/RandomAccessFile",
    "java/io/BufferedReader",
    "java/io/BufferedWriter",
];

const NETWORK_PREFIXES: &[&str] = &["java/net/", "okhttp3/", "retrofit2/", "org/apache/http/"];

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Clone, Debug)]
/// Per-category enable flags, loaded from the `[detectors]` config section.
/// Every category defaults to enabled.
pub struct DetectorToggles {
    #[serde(default = "default_true")]
    pub object_allocation: bool,
    #[serde(default = "default_true")]
    pub string_operation: bool,
    #[serde(default = "default_true")]
    pub collection_operation: bool,
    #[serde(default = "default_true")]
    pub file_io: bool,
    #[serde(default = "default_true")]
    pub network_operation: bool,
    #[serde(default = "default_true")]
    pub database_operation: bool,
    #[serde(default = "default_true")]
    pub image_decode: bool,
    #[serde(default = "default_true")]
    pub heavy_computation: bool,
    #[serde(default = "default_true")]
    pub reflection: bool,
    #[serde(default = "default_true")]
    pub system_call: bool,
    #[serde(default = "default_true")]
    pub custom_pattern: bool,
}

impl Default for DetectorToggles {
    fn default() -> Self {
        DetectorToggles {
            object_allocation: true,
            string_operation: true,
            collection_operation: true,
            file_io: true,
            network_operation: true,
            database_operation: true,
            image_decode: true,
            heavy_computation: true,
            reflection: true,
            system_call: true,
            custom_pattern: true,
        }
    }
}

/// One rule firing: the category plus the human texts for the issue.
pub struct RuleHit {
    pub issue_type: IssueType,
    pub message: String,
    pub suggestion: String,
}

/// Compiled rule catalog handed to every method scan.
pub struct RuleSet {
    toggles: DetectorToggles,
    custom: Vec<Regex>,
}

impl RuleSet {
    /// Build a catalog from toggles and operator-supplied glob patterns for
    /// `owner.method` strings. Malformed patterns are dropped, matching the
    /// exclusion filter's fail-open contract.
    pub fn new(toggles: DetectorToggles, custom_patterns: &[String]) -> Self {
        let custom = custom_patterns
            .iter()
            .filter_map(|p| filter::compile_glob(p))
            .collect();
        RuleSet { toggles, custom }
    }

    /// Classify a type-allocation event.
    pub fn check_alloc(&self, type_name: &str) -> Option<RuleHit> {
        if !self.toggles.object_allocation {
            return None;
        }
        let costly = COSTLY_ALLOCATIONS.contains(&type_name)
            || COSTLY_ALLOCATION_PREFIXES
                .iter()
                .any(|p| type_name.starts_with(p));
        if !costly {
            return None;
        }
        Some(RuleHit {
            issue_type: IssueType::ObjectAllocation,
            message: format!(
                "Allocation of {} inside a draw callback",
                filter::normalize_class_name(type_name)
            ),
            suggestion: "Allocate once outside the draw path and reuse the instance".into(),
        })
    }

    /// Classify a method-invocation event. All matching rules fire.
    pub fn check_invoke(&self, owner: &str, name: &str) -> Vec<RuleHit> {
        let mut hits = Vec::new();
        let dotted_owner = filter::normalize_class_name(owner);

        if self.toggles.string_operation
            && owner == "java/lang/String"
            && STRING_METHODS.contains(&name)
        {
            hits.push(RuleHit {
                issue_type: IssueType::StringOperation,
                message: format!("String.{} builds a new string every frame", name),
                suggestion: "Precompute the text outside the draw path".into(),
            });
        }
        if self.toggles.collection_operation
            && owner.starts_with("java/util/")
            && COLLECTION_METHODS.contains(&name)
        {
            hits.push(RuleHit {
                issue_type: IssueType::CollectionOperation,
                message: format!("Collection mutation {}.{} in a draw callback", dotted_owner, name),
                suggestion: "Prepare collection contents before drawing".into(),
            });
        }
        if self.toggles.reflection && owner.starts_with("java/lang/reflect/") {
            hits.push(RuleHit {
                issue_type: IssueType::Reflection,
                message: format!("Reflective call {}.{} in a draw callback", dotted_owner, name),
                suggestion: "Resolve members once during initialization".into(),
            });
        }
        if self.toggles.file_io && FILE_IO_OWNERS.contains(&owner) {
            hits.push(RuleHit {
                issue_type: IssueType::FileIo,
                message: format!("File I/O via {} in a draw callback", dotted_owner),
                suggestion: "Move file access to a background worker".into(),
            });
        }
        if self.toggles.network_operation
            && NETWORK_PREFIXES.iter().any(|p| owner.starts_with(p))
        {
            hits.push(RuleHit {
                issue_type: IssueType::NetworkOperation,
                message: format!("Network call {}.{} in a draw callback", dotted_owner, name),
                suggestion: "Fetch data asynchronously and invalidate when it arrives".into(),
            });
        }
        if self.toggles.database_operation {
            let lower = owner.to_ascii_lowercase();
            if lower.contains("database") || lower.contains("sqlite") || lower.contains("room") {
                hits.push(RuleHit {
                    issue_type: IssueType::DatabaseOperation,
                    message: format!("Database access {}.{} in a draw callback", dotted_owner, name),
                    suggestion: "Query off the UI thread and cache the result".into(),
                });
            }
        }
        if self.toggles.image_decode
            && owner == "android/graphics/BitmapFactory"
            && name.starts_with("decode")
        {
            hits.push(RuleHit {
                issue_type: IssueType::ImageDecode,
                message: format!("BitmapFactory.{} decodes an image per frame", name),
                suggestion: "Decode once and keep the bitmap".into(),
            });
        }
        if self.toggles.heavy_computation
            && owner == "java/lang/Math"
            && MATH_METHODS.contains(&name)
        {
            hits.push(RuleHit {
                issue_type: IssueType::HeavyComputation,
                message: format!("Math.{} computed in a draw callback", name),
                suggestion: "Cache the computed value or use a lookup table".into(),
            });
        }
        if self.toggles.custom_pattern && !self.custom.is_empty() {
            let qualified = format!("{}.{}", dotted_owner, name);
            if self.custom.iter().any(|re| re.is_match(&qualified)) {
                hits.push(RuleHit {
                    issue_type: IssueType::CustomPattern,
                    message: format!("Call {} matches a custom pattern", qualified),
                    suggestion: "Flagged by project configuration".into(),
                });
            }
        }
        hits
    }

    /// Classify a field-access event.
    pub fn check_field(&self, op: FieldOp, owner: &str, name: &str) -> Option<RuleHit> {
        if !self.toggles.system_call {
            return None;
        }
        if op == FieldOp::GetStatic && owner == "java/lang/System" {
            return Some(RuleHit {
                issue_type: IssueType::SystemCall,
                message: format!("Static read of System.{} in a draw callback", name),
                suggestion: "Avoid system property reads while drawing".into(),
            });
        }
        None
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::new(DetectorToggles::default(), &[])
    }
}
