use bitflags::bitflags;

bitflags! {
    /// Switches that change how values are written.
    ///
    /// The default is empty: every child element below the root carries a
    /// `Type` attribute naming its runtime type.
    ///
    /// # Examples
    ///
    /// ```
    /// use xc_convert::ConvertOptions;
    ///
    /// let options = ConvertOptions::default();
    /// assert!(options.annotate_types());
    ///
    /// let options = ConvertOptions::EXCLUDE_TYPE_ANNOTATIONS;
    /// assert!(!options.annotate_types());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ConvertOptions: u8 {
        /// Do not write `Type` attributes.
        ///
        /// Containers that declare no item, key or value type (such as
        /// [`DynamicSequence`](crate::ops::DynamicSequence)) cannot be read
        /// back from output written with this flag.
        const EXCLUDE_TYPE_ANNOTATIONS = 1;
    }
}

impl ConvertOptions {
    /// Returns `true` unless [`EXCLUDE_TYPE_ANNOTATIONS`](Self::EXCLUDE_TYPE_ANNOTATIONS) is set.
    #[inline]
    pub const fn annotate_types(self) -> bool {
        !self.contains(Self::EXCLUDE_TYPE_ANNOTATIONS)
    }
}
