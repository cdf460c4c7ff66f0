use super::RBTree;
use super::node::{Color, Link};
use crate::error::InvariantViolation;

impl<K: Ord, V> RBTree<K, V> {
    /// Walks the whole tree and checks every structural and coloring rule.
    ///
    /// On success returns the black-height: the number of black nodes on
    /// every path from the root down to an absent child.
    ///
    /// Complexity: O(n)
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        if self.color(self.root) == Color::Red {
            return Err(InvariantViolation::RedRoot)
        }

        let mut position = 0;
        let black_height = self.check_subtree(self.root, None, None, None, &mut position)?;

        if position != self.len() {
            return Err(InvariantViolation::LengthMismatch { reachable: position, recorded: self.len() })
        }
        Ok(black_height)
    }

    fn check_subtree(
        &self,
        link: Link,
        parent: Link,
        lower: Option<&K>,
        upper: Option<&K>,
        position: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let Some(index) = link else { return Ok(0) };
        let node = &self.arena[index];

        let left = self.check_subtree(node.left, link, lower, Some(&node.key), position)?;
        let here = *position;
        *position += 1;

        if node.parent != parent {
            return Err(InvariantViolation::BrokenParentLink { position: here })
        }
        if lower.is_some_and(|l| node.key <= *l) || upper.is_some_and(|u| node.key >= *u) {
            return Err(InvariantViolation::OutOfOrder { position: here })
        }
        if node.color == Color::Red
            && (self.color(node.left) == Color::Red || self.color(node.right) == Color::Red)
        {
            return Err(InvariantViolation::RedRed { position: here })
        }

        let right = self.check_subtree(node.right, link, Some(&node.key), upper, position)?;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch { position: here, left, right })
        }

        Ok(left + usize::from(node.color == Color::Black))
    }
}
