use std::fmt;

use super::types::{Category, CheckerRecord};

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for CheckerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {} {} ({})",
            self.category(),
            self.id(),
            self.subject(),
            self.version_interval(),
            self.vulnerability()
        )
    }
}
