
use crate::node::Node;

/// Checks both ordering rules at every node: everything on the left is no
/// greater than the node and everything on the right is strictly greater.
pub(crate) fn is_ordered<T: Ord>(node: Option<&Node<T>>) -> bool {
    fn check<'a, T: Ord>(
        node: Option<&'a Node<T>>,
        low: Option<&'a T>,
        high: Option<&'a T>,
    ) -> bool {
        match node {
            None => true,
            Some(n) => {
                let above_low = low.map_or(true, |low| n.value() > low);
                let within_high = high.map_or(true, |high| n.value() <= high);
                above_low
                    && within_high
                    && check(n.left(), low, Some(n.value()))
                    && check(n.right(), Some(n.value()), high)
            }
        }
    }

    check(node, None, None)
}
