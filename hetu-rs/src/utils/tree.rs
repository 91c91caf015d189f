//! Tree rendering for diagram hierarchies

use console::Style;

/// A node in a rendered hierarchy
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<TreeNode>,
    /// Key/value details printed under (or beside) the node
    pub details: Vec<(String, String)>,
}

/// Levels of a diagram hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Diagram,
    Face,
    Zone,
    Group,
    Point,
}

/// Options for tree rendering
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    pub max_depth: Option<usize>,
    pub no_color: bool,
    /// Show details inline instead of on their own lines
    pub compact: bool,
}

impl TreeNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
            details: Vec::new(),
        }
    }

    /// Add a child node
    pub fn add_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add a detail line
    pub fn with_detail(mut self, key: &str, value: impl Into<String>) -> Self {
        self.details.push((key.to_string(), value.into()));
        self
    }
}

impl NodeKind {
    /// Icon shown before the node name
    pub fn icon(&self) -> &'static str {
        match self {
            NodeKind::Diagram => "☯",
            NodeKind::Face => "▣",
            NodeKind::Zone => "◈",
            NodeKind::Group => "●",
            NodeKind::Point => "·",
        }
    }

    /// Color style for the node name
    pub fn style(&self, no_color: bool) -> Style {
        if no_color {
            return Style::new();
        }
        match self {
            NodeKind::Diagram => Style::new().bold().cyan(),
            NodeKind::Face => Style::new().bold().yellow(),
            NodeKind::Zone => Style::new().magenta(),
            NodeKind::Group => Style::new().green(),
            NodeKind::Point => Style::new().dim(),
        }
    }
}

/// Render a tree to a string
pub fn render_tree(root: &TreeNode, options: &TreeOptions) -> String {
    let mut output = String::new();
    render_node(root, &mut output, "", true, 0, options);
    output
}

fn render_node(
    node: &TreeNode,
    output: &mut String,
    prefix: &str,
    is_last: bool,
    depth: usize,
    options: &TreeOptions,
) {
    if let Some(max_depth) = options.max_depth
        && depth > max_depth
    {
        return;
    }

    let connector = if depth == 0 {
        ""
    } else if is_last {
        "└── "
    } else {
        "├── "
    };
    let style = node.kind.style(options.no_color);
    output.push_str(&format!(
        "{}{}{} {}",
        prefix,
        connector,
        node.kind.icon(),
        style.apply_to(&node.name)
    ));

    if options.compact && !node.details.is_empty() {
        let parts: Vec<String> = node
            .details
            .iter()
            .map(|(key, value)| format!("{key}:{value}"))
            .collect();
        output.push_str(&format!(" [{}]", parts.join(", ")));
    }
    output.push('\n');

    let child_prefix = if depth == 0 {
        String::new()
    } else {
        format!("{}{}", prefix, if is_last { "    " } else { "│   " })
    };

    if !options.compact {
        let key_style = if options.no_color {
            Style::new()
        } else {
            Style::new().dim()
        };
        for (key, value) in &node.details {
            output.push_str(&format!(
                "{}    {}: {}\n",
                child_prefix,
                key_style.apply_to(key),
                value
            ));
        }
    }

    for (i, child) in node.children.iter().enumerate() {
        let is_last_child = i == node.children.len() - 1;
        render_node(child, output, &child_prefix, is_last_child, depth + 1, options);
    }
}
