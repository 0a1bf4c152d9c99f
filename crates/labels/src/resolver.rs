// Chunk: docs/chunks/tab_bar_interaction - Label derivation and disambiguation

use std::path::MAIN_SEPARATOR;

use indexmap::IndexMap;

use crate::format::{Describe, LabelFormat, Verbosity};
use crate::shorten::shorten_with;

/// The text a single tab shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TabLabel<D> {
    /// The document this label belongs to
    pub document: D,
    /// Display name
    pub name: String,
    /// Disambiguating context, empty when there is nothing to show
    pub description: String,
    /// Tooltip text
    pub title: String,
}

/// Computes labels for an ordered list of documents.
#[derive(Debug, Clone, Copy)]
pub struct LabelResolver {
    format: LabelFormat,
    separator: char,
}

impl LabelResolver {
    /// Creates a resolver for the given format using the platform separator.
    pub fn new(format: LabelFormat) -> Self {
        Self {
            format,
            separator: MAIN_SEPARATOR,
        }
    }

    /// Uses `separator` when splitting descriptions into path segments.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn format(&self) -> LabelFormat {
        self.format
    }

    /// Returns one label per document, in input order.
    ///
    /// Only [`LabelFormat::Auto`] disambiguates. In that mode:
    ///
    /// - documents whose name is unique get an empty description;
    /// - documents without a description are left out of the comparison and
    ///   end up with an empty description;
    /// - if same-named documents share a medium description but differ in
    ///   their long one, the whole name group switches to long descriptions;
    /// - a name group with a single distinct description shows none;
    /// - otherwise each distinct description is shortened against the others.
    pub fn resolve<D: Describe + Clone>(&self, documents: &[D]) -> Vec<TabLabel<D>> {
        let (verbosity, disambiguate) = self.format.flags();

        let names: Vec<String> = documents.iter().map(Describe::name).collect();
        let mut descriptions: Vec<Option<String>> =
            documents.iter().map(|doc| doc.description(verbosity)).collect();

        if disambiguate {
            self.disambiguate(documents, &names, &mut descriptions);
        }

        documents
            .iter()
            .zip(names)
            .zip(descriptions)
            .map(|((document, name), description)| TabLabel {
                document: document.clone(),
                name,
                description: description.unwrap_or_default(),
                title: document.title(Verbosity::Long).unwrap_or_default(),
            })
            .collect()
    }

    fn disambiguate<D: Describe>(
        &self,
        documents: &[D],
        names: &[String],
        descriptions: &mut [Option<String>],
    ) {
        let mut by_name: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (index, name) in names.iter().enumerate() {
            if descriptions[index].is_some() {
                by_name.entry(name.as_str()).or_default().push(index);
            }
        }

        for members in by_name.into_values() {
            if let [only] = members[..] {
                descriptions[only] = Some(String::new());
                continue;
            }

            let mut by_description = group_by_description(&members, descriptions);

            let needs_long = by_description
                .values()
                .any(|same| same.len() > 1 && long_descriptions_differ(documents, same));
            if needs_long {
                for &index in &members {
                    descriptions[index] = documents[index].description(Verbosity::Long);
                }
                by_description = group_by_description(&members, descriptions);
            }

            if by_description.len() == 1 {
                for &index in &members {
                    descriptions[index] = Some(String::new());
                }
                continue;
            }

            let distinct: Vec<&str> = by_description.keys().flatten().map(String::as_str).collect();
            let mut shortened = shorten_with(&distinct, self.separator).into_iter();

            for (description, same) in by_description {
                let label = match description {
                    Some(_) => shortened.next(),
                    None => None,
                };
                for index in same {
                    descriptions[index] = Some(label.clone().unwrap_or_default());
                }
            }
        }
    }
}

impl Default for LabelResolver {
    fn default() -> Self {
        Self::new(LabelFormat::default())
    }
}

/// Computes labels with the platform separator.
pub fn compute_labels<D: Describe + Clone>(documents: &[D], format: LabelFormat) -> Vec<TabLabel<D>> {
    LabelResolver::new(format).resolve(documents)
}

fn group_by_description(
    members: &[usize],
    descriptions: &[Option<String>],
) -> IndexMap<Option<String>, Vec<usize>> {
    let mut groups: IndexMap<Option<String>, Vec<usize>> = IndexMap::new();
    for &index in members {
        groups.entry(descriptions[index].clone()).or_default().push(index);
    }
    groups
}

fn long_descriptions_differ<D: Describe>(documents: &[D], indices: &[usize]) -> bool {
    let mut long = indices.iter().map(|&index| documents[index].description(Verbosity::Long));
    match long.next() {
        Some(first) => long.any(|other| other != first),
        None => false,
    }
}
