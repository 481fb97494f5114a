//! XML parsing for project files and package manifests.
//!
//! Elements are matched by local tag name, so a csproj carrying the msbuild
//! default namespace parses the same as a bare one.

use roxmltree::{Document, Node};
use vsfile::normalize_path;

use crate::entity::{AssemblyReference, CodeFile, PackageReference, Project};
use crate::error::ProjectError;

/// The recognized item-group kinds, keyed by the tag of a group's first
/// element child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemKind {
    Reference,
    Compile,
    Package,
}

impl ItemKind {
    /// Classify an item group from its first element child.
    ///
    /// The classification is made once and applied to every child of the
    /// group. Item groups are homogeneous by convention; a mixed group
    /// decodes its later items under the first item's kind.
    fn classify(first: Node<'_, '_>) -> Option<ItemKind> {
        match first.tag_name().name() {
            "Reference" => Some(ItemKind::Reference),
            "Compile" if first.has_attribute("Include") => Some(ItemKind::Compile),
            "PackageReference" => Some(ItemKind::Package),
            _ => None,
        }
    }
}

/// Parse project file text into a [`Project`].
///
/// Iterates the element children of the root, decodes every `ItemGroup`
/// whose first child is a recognized kind, and ignores everything else.
/// Groups of the same kind accumulate in document order.
///
/// # Errors
///
/// `ProjectError::Xml` when the text is not well-formed XML,
/// `ProjectError::NoRoot` when the document has no root element.
pub fn parse_project_source(text: &str) -> Result<Project, ProjectError> {
    let doc = Document::parse(text)?;
    let root = doc
        .root()
        .first_element_child()
        .ok_or(ProjectError::NoRoot)?;

    let mut project = Project::default();
    for group in element_children(root) {
        if group.tag_name().name() != "ItemGroup" {
            continue;
        }
        let items: Vec<Node<'_, '_>> = element_children(group).collect();
        let Some(kind) = items.first().copied().and_then(ItemKind::classify) else {
            continue;
        };
        match kind {
            ItemKind::Reference => project
                .references
                .extend(items.iter().map(|n| decode_assembly_reference(*n))),
            ItemKind::Compile => project
                .code_files
                .extend(items.iter().map(|n| decode_code_file(*n))),
            ItemKind::Package => project
                .packages
                .extend(items.iter().map(|n| decode_package_reference(*n))),
        }
    }
    Ok(project)
}

/// Parse `packages.config` text into a flat list of package references.
///
/// Every element child of the root named `package` becomes one entry; other
/// children are ignored.
///
/// # Errors
///
/// `ProjectError::Xml` when the text is not well-formed XML.
pub fn parse_packages_source(text: &str) -> Result<Vec<PackageReference>, ProjectError> {
    let doc = Document::parse(text)?;

    Ok(element_children(doc.root_element())
        .filter(|n| n.tag_name().name() == "package")
        .map(|n| PackageReference {
            name: attribute_or_empty(n, "id"),
            version: attribute_or_empty(n, "version"),
            target_framework: attribute_or_empty(n, "targetFramework"),
        })
        .collect())
}

fn element_children<'a, 'd>(node: Node<'a, 'd>) -> impl Iterator<Item = Node<'a, 'd>> {
    node.children().filter(Node::is_element)
}

fn attribute_or_empty(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

/// Decode one `<Reference>` node.
///
/// The `Include` attribute is split on `", "`: part 0 is the assembly name,
/// each later part is a `Key=Value` pair. Only `Version`, `Culture`,
/// `processorArchitecture`, and `PublicKeyToken` are recognized; a part
/// that does not split into exactly two pieces is skipped.
fn decode_assembly_reference(node: Node<'_, '_>) -> AssemblyReference {
    let include = node.attribute("Include").unwrap_or_default();
    let mut parts = include.split(", ");

    let mut reference = AssemblyReference {
        assembly_name: parts.next().unwrap_or_default().to_string(),
        ..AssemblyReference::default()
    };

    for part in parts {
        let pieces: Vec<&str> = part.split('=').collect();
        if pieces.len() != 2 {
            continue;
        }
        let value = Some(pieces[1].to_string());
        match pieces[0] {
            "Version" => reference.version = value,
            "Culture" => reference.culture = value,
            "processorArchitecture" => reference.processor_architecture = value,
            "PublicKeyToken" => reference.public_key_token = value,
            _ => {}
        }
    }

    if let Some(hint) = node.first_element_child() {
        if hint.tag_name().name() == "HintPath" {
            if let Some(text) = hint.text() {
                if !text.is_empty() {
                    reference.hint_path = Some(normalize_path(text));
                }
            }
        }
    }

    reference
}

fn decode_code_file(node: Node<'_, '_>) -> CodeFile {
    CodeFile {
        file_name: normalize_path(node.attribute("Include").unwrap_or_default()),
    }
}

fn decode_package_reference(node: Node<'_, '_>) -> PackageReference {
    PackageReference {
        name: attribute_or_empty(node, "Include"),
        version: attribute_or_empty(node, "Version"),
        target_framework: attribute_or_empty(node, "targetFramework"),
    }
}
