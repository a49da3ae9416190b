//! Sort names by last name, then by given names
//!
//! ```
//! use name_sorter::sort::sort_names;
//! let sorted = sort_names(&["john smith", "Alice Brown", "BOB MARLEY"]);
//! assert_eq!(sorted, ["Alice Brown", "BOB MARLEY", "john smith"]);
//! ```

use crate::name::NameKey;
use crate::prelude::*;
use crate::util::is_blank;
use std::path::PathBuf;

/// default for [`SortConfig::output`]
pub const DEFAULT_OUTPUT: &str = "sorted-names-list.txt";

/// Orders names with a [Comp], last token first, then the given names.
#[derive(Debug, Default)]
pub struct NameSorter {
    comp: Comp,
}

impl NameSorter {
    /// new
    #[must_use]
    pub const fn new(comp: Comp) -> Self {
        Self { comp }
    }
    /// the comparison in use
    #[must_use]
    pub const fn comp(&self) -> &Comp {
        &self.comp
    }
    fn comp_keys(&mut self, left: &NameKey<'_>, right: &NameKey<'_>) -> Ordering {
        self.comp
            .comp(left.last(), right.last())
            .then_with(|| self.comp.comp(left.given(), right.given()))
    }
    /// compare two names. Blank names have empty keys.
    pub fn comp_names(&mut self, left: &str, right: &str) -> Ordering {
        self.comp_keys(&NameKey::new_lossy(left), &NameKey::new_lossy(right))
    }
    /// Return the non-blank names, sorted. Each name is returned exactly as given,
    /// and names with equal keys stay in their original order.
    pub fn sort<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<String> {
        let mut keyed: Vec<(NameKey<'_>, &str)> = names
            .iter()
            .map(|x| x.as_ref())
            .filter_map(|x| NameKey::new(x).map(|k| (k, x)))
            .collect();
        keyed.sort_by(|a, b| self.comp_keys(&a.0, &b.0));
        keyed.into_iter().map(|(_, x)| x.to_string()).collect()
    }
    /// true if sorting would not change the order of the non-blank names
    pub fn is_sorted<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        let keys: Vec<NameKey<'_>> =
            names.iter().filter_map(|x| NameKey::new(x.as_ref())).collect();
        keys.windows(2).all(|w| self.comp_keys(&w[0], &w[1]) != Ordering::Greater)
    }
}

/// sort with the default comparison
#[must_use]
pub fn sort_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    NameSorter::default().sort(names)
}

/// Everything needed for one run : read, sort, show, save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// file of names, one per line
    pub input: PathBuf,
    /// sorted names are written here, replacing any previous contents
    pub output: PathBuf,
    /// comparison spec for [`CompMaker::make_comp`]
    pub method: String,
    /// also write the sorted names to the `out` argument of `run`
    pub echo: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            method: String::new(),
            echo: true,
        }
    }
}

impl SortConfig {
    /// new, reading from `input`, other settings are defaults
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self { input: input.into(), ..Self::default() }
    }
    /// Sort the input file, write the result to `out` and to the output file.
    /// Nothing is written if the input is not an existing file.
    pub fn run(&self, out: &mut dyn Write) -> Result<Vec<String>> {
        if !self.input.is_file() {
            return Err(Error::NotFound(self.input.display().to_string()));
        }
        let mut sorter = NameSorter::new(CompMaker::make_comp(&self.method)?);
        tracing::debug!(method = ?sorter.comp(), "comparison method");

        let names = read_names(&self.input)?;
        tracing::debug!(count = names.len(), input = %self.input.display(), "read names");
        debug_assert!(names.iter().all(|x| !is_blank(x)));

        let sorted = sorter.sort(&names);
        if self.echo {
            write_names(out, &sorted)?;
        }
        let mut w = get_writer(&self.output)?;
        write_names(&mut w, &sorted)?;
        tracing::info!(count = sorted.len(), output = %self.output.display(), "wrote sorted names");
        Ok(sorted)
    }
}
