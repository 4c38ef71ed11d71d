use serde::Serialize;

/// Checker categories, in the order their sections are read from a resource.
/// IMPORTANT: Variant order matters: within one file, a later category
/// overwrites an earlier one on id collision. Do NOT reorder these variants.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Npm,
    Wp,
    Iis,
    Technote,
    Zeroboard,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Npm,
        Category::Wp,
        Category::Iis,
        Category::Technote,
        Category::Zeroboard,
    ];

    /// Key of this category's object under the `dacg` root.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Npm => "npm",
            Category::Wp => "wp",
            Category::Iis => "iis",
            Category::Technote => "technote",
            Category::Zeroboard => "zeroboard",
        }
    }

    /// Fields every record of this category must carry as non-empty strings.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Category::Npm => &["library", "versionInterval", "vulnerability", "id"],
            Category::Wp | Category::Iis => {
                &["target", "name", "vulnerability", "versionInterval", "id"]
            }
            Category::Technote | Category::Zeroboard => {
                &["name", "vulnerability", "versionInterval", "id"]
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NpmRecord {
    pub library: String,
    pub version_interval: String,
    pub vulnerability: String,
    pub id: String,
}

/// Shape shared by the `wp` and `iis` categories.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TargetedRecord {
    pub target: String,
    pub name: String,
    pub vulnerability: String,
    pub version_interval: String,
    pub id: String,
}

/// Shape shared by the `technote` and `zeroboard` categories.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NamedRecord {
    pub name: String,
    pub vulnerability: String,
    pub version_interval: String,
    pub id: String,
}

pub type WpRecord = TargetedRecord;
pub type IisRecord = TargetedRecord;
pub type TechnoteRecord = NamedRecord;
pub type ZeroboardRecord = NamedRecord;

/// Metadata for one checker, tagged by the category it was declared under.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum CheckerRecord {
    Npm(NpmRecord),
    Wp(WpRecord),
    Iis(IisRecord),
    Technote(TechnoteRecord),
    Zeroboard(ZeroboardRecord),
}

impl CheckerRecord {
    pub fn category(&self) -> Category {
        match self {
            CheckerRecord::Npm(_) => Category::Npm,
            CheckerRecord::Wp(_) => Category::Wp,
            CheckerRecord::Iis(_) => Category::Iis,
            CheckerRecord::Technote(_) => Category::Technote,
            CheckerRecord::Zeroboard(_) => Category::Zeroboard,
        }
    }

    /// Checker id with the casing it had in the resource.
    pub fn id(&self) -> &str {
        match self {
            CheckerRecord::Npm(r) => &r.id,
            CheckerRecord::Wp(r) | CheckerRecord::Iis(r) => &r.id,
            CheckerRecord::Technote(r) | CheckerRecord::Zeroboard(r) => &r.id,
        }
    }

    pub fn vulnerability(&self) -> &str {
        match self {
            CheckerRecord::Npm(r) => &r.vulnerability,
            CheckerRecord::Wp(r) | CheckerRecord::Iis(r) => &r.vulnerability,
            CheckerRecord::Technote(r) | CheckerRecord::Zeroboard(r) => &r.vulnerability,
        }
    }

    pub fn version_interval(&self) -> &str {
        match self {
            CheckerRecord::Npm(r) => &r.version_interval,
            CheckerRecord::Wp(r) | CheckerRecord::Iis(r) => &r.version_interval,
            CheckerRecord::Technote(r) | CheckerRecord::Zeroboard(r) => &r.version_interval,
        }
    }

    /// The affected component: npm library, or plugin/product name otherwise.
    pub fn subject(&self) -> &str {
        match self {
            CheckerRecord::Npm(r) => &r.library,
            CheckerRecord::Wp(r) | CheckerRecord::Iis(r) => &r.name,
            CheckerRecord::Technote(r) | CheckerRecord::Zeroboard(r) => &r.name,
        }
    }
}
