//! Macros to construct irregular verb endings.

/// Construct [`Endings`] for the given irregular kinds.
///
/// Kinds which are left out have no conjugation in the constructed form.
///
/// [`Endings`]: crate::verb::Endings
macro_rules! endings {
    ($($kind:ident => $ending:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut endings = $crate::verb::Endings::new();
        $(endings.insert($crate::verb::IrregularKind::$kind, $ending);)*
        endings
    }};
}
