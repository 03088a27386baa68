//! Classes exempt from value-class mangling.
//!
//! Some standard-library types are value classes structurally but are used
//! so pervasively (the success/failure result wrapper being the canonical
//! case) that mangling every callable mentioning them would break the
//! platform-visible API of ordinary code. They are listed by identity.
//! Membership is never inferred from a class's shape.

use rustc_hash::FxHashSet;

use vcm_ir::{ClassDecl, FqName, StringInterner};

/// Qualified names of the standard-library exemptions.
pub const STANDARD_EXEMPTIONS: &[&str] = &["core.Result"];

/// Fixed set of class identities that are never mangled.
///
/// Built once per compilation and passed explicitly to the
/// [`ManglingEngine`](crate::ManglingEngine); there is no global instance.
#[derive(Clone, Debug, Default)]
pub struct ExemptionRegistry {
    names: FxHashSet<FqName>,
}

impl ExemptionRegistry {
    /// The standard-library exemption list.
    pub fn standard(interner: &StringInterner) -> Self {
        Self::from_names(
            STANDARD_EXEMPTIONS
                .iter()
                .map(|path| FqName::new(interner, path)),
        )
    }

    /// A custom exemption list.
    pub fn from_names(names: impl IntoIterator<Item = FqName>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Check if `name` is exempt. Unknown identities are not.
    #[inline]
    pub fn is_exempt(&self, name: FqName) -> bool {
        self.names.contains(&name)
    }

    /// Check if `class` is exempt.
    #[inline]
    pub fn is_exempt_class(&self, class: &ClassDecl) -> bool {
        self.is_exempt(class.name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use vcm_ir::ClassFlags;

    use super::*;

    #[test]
    fn standard_list_contains_result() {
        let interner = StringInterner::new();
        let registry = ExemptionRegistry::standard(&interner);

        assert_eq!(registry.len(), STANDARD_EXEMPTIONS.len());
        assert!(registry.is_exempt(FqName::new(&interner, "core.Result")));
    }

    #[test]
    fn unknown_identity_is_not_exempt() {
        let interner = StringInterner::new();
        let registry = ExemptionRegistry::standard(&interner);

        assert!(!registry.is_exempt(FqName::new(&interner, "units.Meters")));
        // Same short name, different package.
        assert!(!registry.is_exempt(FqName::new(&interner, "app.Result")));
    }

    #[test]
    fn exemption_ignores_class_shape() {
        let interner = StringInterner::new();
        let registry = ExemptionRegistry::standard(&interner);
        let name = FqName::new(&interner, "core.Result");

        for flags in [ClassFlags::VALUE, ClassFlags::empty(), ClassFlags::SEALED] {
            let decl = ClassDecl {
                name,
                flags,
                type_params: Vec::new(),
            };
            assert!(registry.is_exempt_class(&decl));
        }
    }

    #[test]
    fn custom_list_replaces_standard() {
        let interner = StringInterner::new();
        let meters = FqName::new(&interner, "units.Meters");
        let registry = ExemptionRegistry::from_names([meters]);

        assert!(registry.is_exempt(meters));
        assert!(!registry.is_exempt(FqName::new(&interner, "core.Result")));
    }

    #[test]
    fn empty_registry_exempts_nothing() {
        let interner = StringInterner::new();
        let registry = ExemptionRegistry::default();

        assert!(registry.is_empty());
        assert!(!registry.is_exempt(FqName::new(&interner, "core.Result")));
    }
}
