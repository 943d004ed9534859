//! Which launcher the crate is running under, and what that means for exports.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    /// Shown under the export button.
    pub fn export_hint(self) -> &'static str {
        match self {
            Platform::Web => "Dosya tarayıcının indirme klasörüne kaydedilir.",
            Platform::Desktop => "Dosya uygulama veri klasöründeki exports dizinine kaydedilir.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_builds_are_desktop() {
        assert_eq!(Platform::current(), Platform::Desktop);
        assert!(Platform::current().export_hint().contains("exports"));
    }
}
