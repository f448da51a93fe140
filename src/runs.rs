//! WordprocessingML element helpers and the run-text extractor.

use roxmltree::Node;

/// Namespace of the main WordprocessingML vocabulary (`w:` prefix).
pub const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// True if `node` is the WordprocessingML element `name`.
pub(crate) fn is_wml(node: Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(WML_NS)
}

/// All WordprocessingML `name` elements nested anywhere below `node`.
pub(crate) fn wml_descendants<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .filter(move |n| *n != node && is_wml(*n, name))
}

/// Read a `w:`-namespaced attribute.
pub(crate) fn wml_attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute((WML_NS, name))
}

/// Concatenate run texts with no separator.
///
/// Empty pieces contribute nothing; an empty input yields an empty string.
pub fn concat_runs<I, S>(texts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts.into_iter().fold(String::new(), |mut acc, text| {
        acc.push_str(text.as_ref());
        acc
    })
}

/// Text content of a sequence of text-run elements (`w:t`, `w:delText`).
///
/// Elements without a text node are skipped.
pub fn run_text<'a, 'input: 'a, I>(runs: I) -> String
where
    I: IntoIterator<Item = Node<'a, 'input>>,
{
    concat_runs(runs.into_iter().filter_map(|run| run.text()))
}
