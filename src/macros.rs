// Macro to simplify edge-list declarations

/// Builds a `Vec<Edge>` from `source -- destination: weight` entries.
///
/// ```
/// # use arbor::edges;
/// let list = edges![0 -- 1: 4, 1 -- 2: -3];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! edges {
    () => {
        Vec::<$crate::graph::Edge>::new()
    };
    ($($source:literal -- $destination:literal : $weight:expr),+ $(,)?) => {
        vec![$( $crate::graph::Edge::new($source, $destination, $weight) ),+]
    };
}
