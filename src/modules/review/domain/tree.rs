use serde::Serialize;
use std::collections::HashMap;

use super::entities::Review;

/// One node of a movie's reply tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewNode {
    pub review: Review,
    pub children: Vec<ReviewNode>,
    /// The parent reference points at a review that no longer exists
    pub orphaned: bool,
}

/// Reassemble the reply tree from one query's rows.
///
/// Rows are grouped by parent id in memory (arena of indices), so tree depth
/// never costs additional queries. Replies whose parent id no longer resolves
/// surface at the top level with the orphan marker set.
pub fn build_review_tree(reviews: Vec<Review>) -> Vec<ReviewNode> {
    let ids: std::collections::HashSet<i32> = reviews.iter().map(|r| r.id).collect();

    // Index children by parent id; roots and orphans stay separate
    let mut children_of: HashMap<i32, Vec<Review>> = HashMap::new();
    let mut roots: Vec<Review> = Vec::new();
    let mut orphans: Vec<Review> = Vec::new();

    for review in reviews {
        match review.parent_id {
            Some(parent_id) if ids.contains(&parent_id) => {
                children_of.entry(parent_id).or_default().push(review);
            }
            Some(_) => orphans.push(review),
            None => roots.push(review),
        }
    }

    let mut nodes: Vec<ReviewNode> = roots
        .into_iter()
        .map(|review| attach_children(review, &mut children_of, false))
        .collect();
    nodes.extend(
        orphans
            .into_iter()
            .map(|review| attach_children(review, &mut children_of, true)),
    );
    nodes
}

fn attach_children(
    review: Review,
    children_of: &mut HashMap<i32, Vec<Review>>,
    orphaned: bool,
) -> ReviewNode {
    let children = children_of
        .remove(&review.id)
        .unwrap_or_default()
        .into_iter()
        .map(|child| attach_children(child, children_of, false))
        .collect();
    ReviewNode {
        review,
        children,
        orphaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn review(id: i32, parent_id: Option<i32>) -> Review {
        Review {
            id,
            email: format!("user{}@example.com", id),
            name: format!("user{}", id),
            text: "text".to_string(),
            added: Utc::now(),
            parent_id,
            movie_id: 1,
        }
    }

    #[test]
    fn nested_replies_group_under_their_parents() {
        let tree = build_review_tree(vec![
            review(1, None),
            review(2, Some(1)),
            review(3, Some(1)),
            review(4, Some(2)),
            review(5, None),
        ]);

        assert_eq!(tree.len(), 2);
        let first = &tree[0];
        assert_eq!(first.review.id, 1);
        assert_eq!(first.children.len(), 2);
        assert_eq!(first.children[0].review.id, 2);
        assert_eq!(first.children[0].children[0].review.id, 4);
        assert_eq!(tree[1].review.id, 5);
    }

    #[test]
    fn unresolvable_parent_surfaces_at_top_level_as_orphan() {
        let tree = build_review_tree(vec![review(1, None), review(2, Some(99))]);

        assert_eq!(tree.len(), 2);
        assert!(!tree[0].orphaned);
        assert!(tree[1].orphaned);
        assert_eq!(tree[1].review.id, 2);
    }

    #[test]
    fn empty_input_yields_empty_tree() {
        assert!(build_review_tree(Vec::new()).is_empty());
    }
}
