/// Component boilerplate templates and name substitution.
///
/// Templates are embedded at compile time. Each one marks every slot that takes
/// the component name (module path, type name, JSX tag, styled wrapper, story
/// title) with [`NAME_PLACEHOLDER`]. Rendering is a single-pass replace: no
/// escaping and no identifier validation.
const COMPONENT_TEMPLATE: &str = include_str!("templates/component.tsx.tmpl");
const STYLE_TEMPLATE: &str = include_str!("templates/style.tsx.tmpl");
const INDEX_TEMPLATE: &str = include_str!("templates/index.ts.tmpl");
const STORY_TEMPLATE: &str = include_str!("templates/stories.tsx.tmpl");

/// Placeholder replaced by the component name in every template.
pub const NAME_PLACEHOLDER: &str = "{{name}}";

/// The four files that make up a component's boilerplate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// `<Name>.tsx`: the `forwardRef` component and its props interface.
    Component,
    /// `<Name>.style.tsx`: the styled-components wrapper.
    Style,
    /// `index.ts`: the barrel re-export.
    Index,
    /// `<Name>.stories.tsx`: the Storybook story.
    Story,
}

impl TemplateKind {
    /// All kinds, in write order.
    pub const ALL: [Self; 4] = [Self::Component, Self::Style, Self::Index, Self::Story];

    /// File name this template is written to for the given component name.
    #[must_use]
    pub fn file_name(self, name: &str) -> String {
        match self {
            Self::Component => format!("{name}.tsx"),
            Self::Style => format!("{name}.style.tsx"),
            Self::Index => "index.ts".to_owned(),
            Self::Story => format!("{name}.stories.tsx"),
        }
    }

    /// Short identifier used in JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Style => "style",
            Self::Index => "index",
            Self::Story => "story",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Component => "React forwardRef component with a <Name>Props interface",
            Self::Style => "styled-components wrapper (styled.div)",
            Self::Index => "Barrel file re-exporting the component",
            Self::Story => "Storybook story with a Default template",
        }
    }

    const fn template(self) -> &'static str {
        match self {
            Self::Component => COMPONENT_TEMPLATE,
            Self::Style => STYLE_TEMPLATE,
            Self::Index => INDEX_TEMPLATE,
            Self::Story => STORY_TEMPLATE,
        }
    }
}

/// The rendered boilerplate for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComponent {
    /// Component name as supplied by the caller.
    pub name: String,
    pub component: String,
    pub style: String,
    pub index: String,
    pub story: String,
}

impl RenderedComponent {
    /// Rendered text for one template kind.
    #[must_use]
    pub fn get(&self, kind: TemplateKind) -> &str {
        match kind {
            TemplateKind::Component => &self.component,
            TemplateKind::Style => &self.style,
            TemplateKind::Index => &self.index,
            TemplateKind::Story => &self.story,
        }
    }

    /// Iterate over `(kind, contents)` in write order.
    #[must_use]
    pub fn files(&self) -> impl Iterator<Item = (TemplateKind, &str)> {
        TemplateKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

/// Render a single template for `name`.
#[must_use]
pub fn render_template(kind: TemplateKind, name: &str) -> String {
    kind.template().replace(NAME_PLACEHOLDER, name)
}

/// Render all four templates for `name`.
#[must_use]
pub fn render(name: &str) -> RenderedComponent {
    RenderedComponent {
        name: name.to_owned(),
        component: render_template(TemplateKind::Component, name),
        style: render_template(TemplateKind::Style, name),
        index: render_template(TemplateKind::Index, name),
        story: render_template(TemplateKind::Story, name),
    }
}
