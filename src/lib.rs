//! A tiny, lenient, mustache-like string template engine.
//!
//! # Features
//!
//! - Placeholders: `{{ user.name }}`
//! - Chainable filters with arguments: `{{ name|or:buddy|capital }}`
//! - Named templates applied to values and lists: `{{ authors|tpl:author-line }}`
//! - Custom filter functions
//! - Render to a [`String`] or any [`std::io::Write`] implementor
//! - Render using any [`serde`] serializable values
//! - Convenient macro for building contexts:
//!   `rouflaquette::value!{ name: "John", age: 42 }`
//!
//! Rendering never fails because of missing data. A missing value renders as
//! an empty string, an unknown filter is skipped and an unregistered template
//! renders as nothing. See [`ErrorKind`] for the few things that do fail.
//!
//! # Getting started
//!
//! Your entry point is the [`Engine`] struct. The engine stores the syntax
//! config, filter functions, and named templates. Generally, you only need to
//! construct one engine during the lifetime of a program.
//!
//! ```
//! let engine = rouflaquette::Engine::new();
//! let result = engine.render("hello {{user.name|capital}}", rouflaquette::value! { user: { name: "niko" } })?;
//! assert_eq!(result, "hello Niko");
//! # Ok::<(), rouflaquette::Error>(())
//! ```
//!
//! # Filters
//!
//! A placeholder is a dotted path followed by any number of filters separated
//! by `|`. Filter arguments are separated by `:` and passed to the filter as
//! plain strings.
//!
//! | filter                     | purpose                                                    |
//! |----------------------------|------------------------------------------------------------|
//! | `floor`                    | round the number down                                      |
//! | `round`                    | round the number to the nearest integer                    |
//! | `capital`                  | uppercase the first letter of each word                    |
//! | `lowercase`                | lowercase the whole string                                 |
//! | `uppercase`                | uppercase the whole string                                 |
//! | `trim`                     | remove leading and trailing whitespace of every line       |
//! | `subs:from:to`             | extract the characters from `from` up to `to`              |
//! | `replace:what:by`          | replace the first `what` by `by`                           |
//! | `join:separator`           | join list elements using the separator                     |
//! | `mark:what`                | wrap each match of the pattern `what` in `<mark>` tags     |
//! | `plural:none:single:multi` | choose a form from the number, `{}` is replaced by it      |
//! | `or:default`               | use `default` if the value is falsy                        |
//! | `if:then:else`             | use `then` if the value is truthy, `else` otherwise        |
//! | `tpl:name`                 | render a named template with the value as context          |
//!
//! # Examples
//!
//! ### Render lists with named templates
//!
//! ```
//! let mut engine = rouflaquette::Engine::new();
//! engine.add_templates([
//!     ("author-line", "<li>{{name}}</li>"),
//!     ("authors-list", "<h2>{{authors.length|plural:no author:one author:{} authors}}</h2><ul>{{authors|tpl:author-line}}</ul>"),
//! ]);
//!
//! let result = engine.render(
//!     "authors-list",
//!     rouflaquette::value! { authors: [{ name: "asimov" }, { name: "dick" }] },
//! )?;
//! assert_eq!(result, "<h2>2 authors</h2><ul><li>asimov</li><li>dick</li></ul>");
//! # Ok::<(), rouflaquette::Error>(())
//! ```
//!
//! ### Render using structured data
//!
//! ```
//! #[derive(serde::Serialize)]
//! struct Context { user: User }
//!
//! #[derive(serde::Serialize)]
//! struct User { name: String }
//!
//! let ctx = Context { user: User { name: "John Smith".into() } };
//!
//! let result = rouflaquette::Engine::new().render("Hello {{user.name|uppercase}}", &ctx)?;
//!
//! assert_eq!(result, "Hello JOHN SMITH");
//! # Ok::<(), rouflaquette::Error>(())
//! ```
//!
//! ### Add a custom filter
//!
//! ```
//! use rouflaquette::Value;
//!
//! let mut engine = rouflaquette::Engine::new();
//! engine.add_filter("concat", |v: Value, args: &[&str]| {
//!     format!("{}{}", v, args.join(":"))
//! });
//!
//! let result = engine.render("{{txt|concat: isn't it?}}", rouflaquette::value! { txt: "nice" })?;
//! assert_eq!(result, "nice isn't it?");
//! # Ok::<(), rouflaquette::Error>(())
//! ```
//!
//! ### Render a template using custom syntax
//!
//! ```
//! let syntax = rouflaquette::Syntax::builder().expr("<?", "?>").build();
//!
//! let result = rouflaquette::Engine::with_syntax(syntax)
//!     .render("Hello <?user.name?>", rouflaquette::value! { user: { name: "John Smith" } })?;
//!
//! assert_eq!(result, "Hello John Smith");
//! # Ok::<(), rouflaquette::Error>(())
//! ```
//!
//! Paths and filter arguments are taken verbatim, `{{ name }}` looks up the
//! key ` name ` including the spaces.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod compile;
mod error;
mod filters;
mod fmt;
mod macros;
mod render;
mod types;
mod value;

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io;

pub use crate::error::{Error, ErrorKind};
pub use crate::filters::FilterReturn;
pub use crate::types::syntax::{Syntax, SyntaxBuilder};
#[cfg(feature = "serde")]
pub use crate::value::to_value;
pub use crate::value::{List, Map, Value};

use crate::filters::FilterFn;

/// A type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The default maximum depth of nested named templates.
const DEFAULT_MAX_DEPTH: usize = 64;

/// The rendering engine.
///
/// The engine owns a filter registry and a named template registry. Each
/// engine is independent so tests and applications can construct as many as
/// they need.
///
/// Rendering only takes a shared reference, an engine can be shared between
/// threads once all the templates and filters are registered. If templates
/// need to be registered while other threads render, wrap the engine in a
/// [`RwLock`][std::sync::RwLock].
pub struct Engine<'engine> {
    syntax: Syntax<'engine>,
    filters: BTreeMap<Cow<'engine, str>, Box<FilterFn>>,
    templates: BTreeMap<Cow<'engine, str>, Cow<'engine, str>>,
    max_depth: usize,
    strict: bool,
}

impl<'engine> Default for Engine<'engine> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'engine> Engine<'engine> {
    /// Construct a new engine with the builtin filters.
    #[inline]
    pub fn new() -> Self {
        Self::with_syntax(Syntax::default())
    }

    /// Construct a new engine with custom syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use rouflaquette::{Engine, Syntax};
    ///
    /// let syntax = Syntax::builder().expr("<{", "}>").build();
    /// let engine = Engine::with_syntax(syntax);
    /// ```
    #[inline]
    pub fn with_syntax(syntax: Syntax<'engine>) -> Self {
        #[allow(unused_mut)]
        let mut engine = Self::empty(syntax);
        #[cfg(feature = "builtins")]
        filters::builtins::install(&mut engine);
        engine
    }

    /// Construct a new engine with custom syntax and no filters.
    #[inline]
    pub fn empty(syntax: Syntax<'engine>) -> Self {
        Self {
            syntax,
            filters: BTreeMap::new(),
            templates: BTreeMap::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }

    /// Set the maximum depth of nested named templates.
    ///
    /// This is the maximum number of `tpl` filter applications that can be
    /// nested within each other, as counted from the template passed to
    /// render. Exceeding it fails the render with
    /// [`ErrorKind::RecursionExceeded`].
    ///
    /// Defaults to 64.
    #[inline]
    pub fn set_max_depth(&mut self, depth: usize) -> &mut Self {
        self.max_depth = depth;
        self
    }

    /// Set whether unknown filters are an error.
    ///
    /// By default a filter that isn't registered is skipped and the value
    /// passes through unchanged. In strict mode rendering fails with
    /// [`ErrorKind::UnknownFilter`] instead, which is useful to catch typos.
    #[inline]
    pub fn set_strict(&mut self, strict: bool) -> &mut Self {
        self.strict = strict;
        self
    }

    /// Add a new filter to the engine.
    ///
    /// The filter function receives the running value and the invocation's
    /// arguments. An existing filter with the same name is replaced.
    ///
    /// See [`FilterReturn`] for the supported return types.
    #[inline]
    pub fn add_filter<N, F, R>(&mut self, name: N, f: F) -> &mut Self
    where
        N: Into<Cow<'engine, str>>,
        F: Fn(Value, &[&str]) -> R + Send + Sync + 'static,
        R: FilterReturn,
    {
        self.filters.insert(name.into(), filters::new(f));
        self
    }

    /// Add a named template to the engine.
    ///
    /// An existing template with the same name is replaced.
    #[inline]
    pub fn add_template<N, S>(&mut self, name: N, source: S) -> &mut Self
    where
        N: Into<Cow<'engine, str>>,
        S: Into<Cow<'engine, str>>,
    {
        self.templates.insert(name.into(), source.into());
        self
    }

    /// Add many named templates to the engine.
    ///
    /// Existing templates with the same name are replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// let mut templates = HashMap::new();
    /// templates.insert("greeting", "hello {{name}}");
    ///
    /// let mut engine = rouflaquette::Engine::new();
    /// let result = engine
    ///     .add_templates(templates)
    ///     .render("greeting", rouflaquette::value! { name: "niko" })?;
    /// assert_eq!(result, "hello niko");
    /// # Ok::<(), rouflaquette::Error>(())
    /// ```
    pub fn add_templates<I, N, S>(&mut self, templates: I) -> &mut Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<Cow<'engine, str>>,
        S: Into<Cow<'engine, str>>,
    {
        for (name, source) in templates {
            self.add_template(name, source);
        }
        self
    }

    /// Lookup a named template's source.
    #[inline]
    pub fn get_template(&self, name: &str) -> Option<&str> {
        self.templates.get(name).map(|source| &**source)
    }

    /// Render a template to a string using the provided context.
    ///
    /// The template is either the name of a registered template or the
    /// template source itself.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    #[inline]
    pub fn render<S>(&self, template: &str, ctx: S) -> Result<String>
    where
        S: ::serde::Serialize,
    {
        self.render_from(template, &to_value(ctx)?)
    }

    /// Render a template to a string using the provided value.
    #[inline]
    pub fn render_from(&self, template: &str, ctx: &Value) -> Result<String> {
        let (name, source) = self.resolve(template);
        render::to_string(self, name, source, ctx)
    }

    /// Render a template to a writer using the provided context.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    #[inline]
    pub fn render_to_writer<W, S>(&self, writer: W, template: &str, ctx: S) -> Result<()>
    where
        W: io::Write,
        S: ::serde::Serialize,
    {
        self.render_from_to_writer(writer, template, &to_value(ctx)?)
    }

    /// Render a template to a writer using the provided value.
    #[inline]
    pub fn render_from_to_writer<W>(&self, writer: W, template: &str, ctx: &Value) -> Result<()>
    where
        W: io::Write,
    {
        let (name, source) = self.resolve(template);
        render::to_writer(self, name, source, ctx, writer)
    }

    /// Returns the template name, if it is one, and the source to render.
    fn resolve<'a>(&'a self, template: &'a str) -> (Option<&'a str>, &'a str) {
        if template.is_empty() {
            return (None, "");
        }
        match self.templates.get(template) {
            Some(source) => (Some(template), &**source),
            None => (None, template),
        }
    }
}

impl std::fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("syntax", &self.syntax)
            .field("filters", &self.filters.keys())
            .field("templates", &self.templates.keys())
            .field("max_depth", &self.max_depth)
            .field("strict", &self.strict)
            .finish()
    }
}
