//! Tools for comparing name tokens
//!
//!  There is a trait [Compare], which is usually wrapped in a struct [Comp],
//!  which is made by [`CompMaker`] from a short text spec.
//!
//!  The default method, `collate`, is the Unicode Collation Algorithm with the
//!  locale neutral CLDR root order. Accented letters sort next to their
//!  unaccented forms, and case only matters when nothing else differs.
//!
//! ```
//! use name_sorter::comp::CompMaker;
//! use std::cmp::Ordering;
//! let mut comp = CompMaker::make_comp("collate")?;
//! assert_eq!(comp.comp("Álvarez", "Archer"), Ordering::Less);
//! assert_eq!(comp.comp("BOB", "john"), Ordering::Less);
//! let mut comp = CompMaker::make_comp("plain")?;
//! assert_eq!(comp.comp("Álvarez", "Archer"), Ordering::Greater);
//! # Ok::<(), name_sorter::util::Error>(())
//! ```

use crate::prelude::*;
use feruca::{Collator, Locale, Tailoring};

/// method of comparing two strings
pub trait Compare {
    /// Compare two strings
    fn comp(&mut self, left: &str, right: &str) -> Ordering;
    /// Compare two strings for equality
    fn equal(&mut self, left: &str, right: &str) -> bool {
        self.comp(left, right) == Ordering::Equal
    }
}

/// Settings for one Compare object
#[allow(missing_debug_implementations)]
pub struct Comp {
    /// type of comparison
    pub ctype: String,
    /// reverse comparison?
    pub reverse: bool,
    /// the thing that compares
    pub comp: Box<dyn Compare>,
}

impl fmt::Debug for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comp {}{}", self.ctype, if self.reverse { ",rev" } else { "" })
    }
}

impl Default for Comp {
    fn default() -> Self {
        Self { ctype: "collate".to_string(), reverse: false, comp: Box::new(CompareCollate::new()) }
    }
}

impl Comp {
    /// new
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Compare two strings, reversed if requested
    pub fn comp(&mut self, left: &str, right: &str) -> Ordering {
        let x = self.comp.comp(left, right);
        self.reverse(x)
    }
    /// Compare two strings for equality
    pub fn equal(&mut self, left: &str, right: &str) -> bool {
        self.comp.equal(left, right)
    }
    /// reverse the ordering if self.reverse is set
    #[must_use]
    pub const fn reverse(&self, x: Ordering) -> Ordering {
        if self.reverse { x.reverse() } else { x }
    }
}

/// Unicode collation, CLDR root order
#[allow(missing_debug_implementations)]
pub struct CompareCollate {
    collator: Collator,
}

impl CompareCollate {
    /// new
    #[must_use]
    pub fn new() -> Self {
        Self::with_tailoring(Tailoring::Cldr(Locale::Root))
    }
    /// new with an explicit collation table
    #[must_use]
    pub fn with_tailoring(tailoring: Tailoring) -> Self {
        // shifted variable weighting, no byte tiebreak : canonical equivalents compare equal
        Self { collator: Collator::new(tailoring, true, false) }
    }
}

impl Default for CompareCollate {
    fn default() -> Self {
        Self::new()
    }
}

impl Compare for CompareCollate {
    fn comp(&mut self, left: &str, right: &str) -> Ordering {
        self.collator.collate(left, right)
    }
}

/// Compare by code point
#[derive(Debug, Default, Copy, Clone)]
pub struct ComparePlain {}

impl ComparePlain {
    /// new
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Compare for ComparePlain {
    fn comp(&mut self, left: &str, right: &str) -> Ordering {
        left.cmp(right)
    }
    fn equal(&mut self, left: &str, right: &str) -> bool {
        left == right
    }
}

/// Compare the lowercase forms by code point, then the original strings
#[derive(Debug, Default, Copy, Clone)]
pub struct CompareLower {}

impl CompareLower {
    /// new
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Compare for CompareLower {
    fn comp(&mut self, left: &str, right: &str) -> Ordering {
        let lower = left.chars().flat_map(char::to_lowercase);
        lower.cmp(right.chars().flat_map(char::to_lowercase)).then_with(|| left.cmp(right))
    }
}

type MakerFn = fn() -> Box<dyn Compare>;
/// A named constructor for a [Compare], used by [`CompMaker`]
struct CompMakerItem {
    /// matched against `Comp::ctype`
    tag: &'static str,
    /// what this comparator does
    help: &'static str,
    maker: MakerFn,
}

const MAKERS: &[CompMakerItem] = &[
    CompMakerItem {
        tag: "collate",
        help: "Unicode collation, locale neutral CLDR root order. The default.",
        maker: || Box::new(CompareCollate::new()),
    },
    CompMakerItem {
        tag: "ducet",
        help: "Unicode collation, untailored DUCET order.",
        maker: || Box::new(CompareCollate::with_tailoring(Tailoring::Ducet)),
    },
    CompMakerItem {
        tag: "lower",
        help: "Sort as the lowercase of the string, then the plain string.",
        maker: || Box::new(CompareLower::new()),
    },
    CompMakerItem {
        tag: "plain",
        help: "Sort by unicode code point.",
        maker: || Box::new(ComparePlain::new()),
    },
];
const MODIFIERS: &[&str] = &["rev"];
/// the tags of every comparison method, in table order
pub const METHOD_NAMES: &[&str] = &["collate", "ducet", "lower", "plain"];

/// Makes a [Comp]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
pub struct CompMaker {}

impl CompMaker {
    /// names of all comparison methods
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        MAKERS.iter().map(|x| x.tag).collect()
    }
    /// one line per method and modifier
    #[must_use]
    pub fn help() -> String {
        let mut ret = String::from("Modifiers :\nrev         reverse the ordering\nMethods :\n");
        for x in MAKERS {
            ret.push_str(&format!("{:12}{}\n", x.tag, x.help));
        }
        ret
    }
    /// create Comp from spec, e.g. `collate` or `plain,rev`.
    /// An empty method means `collate`.
    pub fn make_comp(spec: &str) -> Result<Comp> {
        let mut parts = spec.split(',');
        let method = parts.next().unwrap_or("").trim();
        let method = if method.is_empty() { "collate" } else { method };
        let mut reverse = false;
        for x in parts {
            let x = x.trim();
            if !MODIFIERS.contains(&x) {
                return err!("Unknown comparison modifier '{}' in '{}'", x, spec);
            }
            reverse = true;
        }
        match MAKERS.iter().find(|x| x.tag.eq_ignore_ascii_case(method)) {
            Some(m) => Ok(Comp { ctype: m.tag.to_string(), reverse, comp: (m.maker)() }),
            None => err!(
                "Unknown comparison method '{}', valid methods are : {}",
                method,
                Self::names().join(", ")
            ),
        }
    }
}
