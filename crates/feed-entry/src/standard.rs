//! Standard entry fields
//!
//! Reads the handful of fields every syndication format has in some
//! spelling: id, title, description, content, link and author. Each field
//! is a list of prefix-relative candidates tried in order; the first
//! non-blank match wins.

use feed_engine_traits::XPathEngine;

use crate::data::EntryData;
use crate::entry::EntryContext;
use crate::error::Result;
use crate::feed_type::EntryVocabulary;
use crate::namespaces::{FormatNamespaces, ModuleNamespaces, NamespaceRegistrar, Registrars};

struct FieldPaths {
    id: &'static [&'static str],
    title: &'static [&'static str],
    description: &'static [&'static str],
    content: &'static [&'static str],
    link: &'static [&'static str],
    author: &'static [&'static str],
}

static ATOM_FIELDS: FieldPaths = FieldPaths {
    id: &["/atom:id"],
    title: &["/atom:title", "/dc:title"],
    description: &["/atom:summary", "/dc:description"],
    content: &["/atom:content", "/content:encoded"],
    link: &[
        "/atom:link[@rel = 'alternate']/@href",
        "/atom:link[not(@rel)]/@href",
    ],
    author: &["/atom:author/atom:name", "/dc:creator", "/dc10:creator"],
};

static RDF_FIELDS: FieldPaths = FieldPaths {
    id: &["/@rdf:about", "/rss:link"],
    title: &["/rss:title", "/dc:title", "/dc10:title"],
    description: &["/rss:description", "/dc:description", "/dc10:description"],
    content: &["/content:encoded"],
    link: &["/rss:link"],
    author: &["/dc:creator", "/dc10:creator"],
};

static ITEM_FIELDS: FieldPaths = FieldPaths {
    id: &["/guid", "/link"],
    title: &["/title", "/dc:title"],
    description: &["/description", "/dc:description"],
    content: &["/content:encoded"],
    link: &["/link"],
    author: &["/author", "/dc:creator", "/dc10:creator"],
};

/// Entry extension reading the standard fields
#[derive(Debug)]
pub struct StandardEntry<'d, T: XPathEngine + 'd> {
    context: EntryContext<'d, T>,
}

impl<'d, T: XPathEngine> StandardEntry<'d, T> {
    /// Wrap `context`, binding the format and common module namespaces
    pub fn new(context: EntryContext<'d, T>) -> Self {
        Self::with_extra(context, Registrars::new())
    }

    /// Like [`StandardEntry::new`], binding `extra` after the built-in
    /// prefixes so callers can add or override bindings
    pub fn with_extra(
        context: EntryContext<'d, T>,
        extra: impl NamespaceRegistrar + 'static,
    ) -> Self {
        let registrar = Registrars::new()
            .with(FormatNamespaces::new(context.feed_type()))
            .with(ModuleNamespaces)
            .with(extra);
        Self {
            context: context.with_registrar(registrar),
        }
    }

    pub fn context(&self) -> &EntryContext<'d, T> {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut EntryContext<'d, T> {
        &mut self.context
    }

    pub fn into_context(self) -> EntryContext<'d, T> {
        self.context
    }

    pub fn id(&mut self) -> Result<Option<String>> {
        let paths = self.paths().id;
        self.first_of(paths)
    }

    pub fn title(&mut self) -> Result<Option<String>> {
        let paths = self.paths().title;
        self.first_of(paths)
    }

    pub fn description(&mut self) -> Result<Option<String>> {
        let paths = self.paths().description;
        self.first_of(paths)
    }

    pub fn content(&mut self) -> Result<Option<String>> {
        let paths = self.paths().content;
        self.first_of(paths)
    }

    pub fn link(&mut self) -> Result<Option<String>> {
        let paths = self.paths().link;
        self.first_of(paths)
    }

    pub fn author(&mut self) -> Result<Option<String>> {
        let paths = self.paths().author;
        self.first_of(paths)
    }

    /// Read every field into the context's record and return a copy of it
    pub fn to_data(&mut self) -> Result<EntryData> {
        let data = EntryData {
            id: self.id()?,
            title: self.title()?,
            description: self.description()?,
            content: self.content()?,
            link: self.link()?,
            author: self.author()?,
            ..self.context.to_data()
        };
        *self.context.data_mut() = data;
        Ok(self.context.to_data())
    }

    fn paths(&self) -> &'static FieldPaths {
        match self.context.feed_type().vocabulary() {
            EntryVocabulary::AtomEntry => &ATOM_FIELDS,
            EntryVocabulary::RdfItem => &RDF_FIELDS,
            EntryVocabulary::PlainItem => &ITEM_FIELDS,
        }
    }

    fn first_of(&mut self, paths: &[&str]) -> Result<Option<String>> {
        for path in paths {
            let value = self.context.query_string(path)?;
            if !value.trim().is_empty() {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}
