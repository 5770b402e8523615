use super::types::Slide;
use crate::errors::AppError;

/// Rewrite every slide's `order` to its position in the collection.
pub fn renumber(slides: &mut [Slide]) {
    for (index, slide) in slides.iter_mut().enumerate() {
        slide.order = index;
    }
}

/// Insert `slide` at `index` (clamped to `0..=len`) and renumber.
/// Returns the index the slide actually landed at.
pub fn insert_at(slides: &mut Vec<Slide>, index: usize, slide: Slide) -> usize {
    let index = index.min(slides.len());
    slides.insert(index, slide);
    renumber(slides);
    index
}

/// Remove the slide at `index` and renumber the rest.
///
/// Fails with `OutOfRange` (leaving the collection untouched) when `index`
/// does not address a slide, including on an empty collection. The new
/// length is `slides.len()` after the call; see [`clamp_active`].
pub fn remove_at(slides: &mut Vec<Slide>, index: usize) -> Result<Slide, AppError> {
    if index >= slides.len() {
        return Err(AppError::OutOfRange { index, len: slides.len() });
    }
    let removed = slides.remove(index);
    renumber(slides);
    Ok(removed)
}

/// Move the slide at `from` to position `to` (clamped to the last index).
/// Returns the final position.
pub fn move_to(slides: &mut Vec<Slide>, from: usize, to: usize) -> Result<usize, AppError> {
    if from >= slides.len() {
        return Err(AppError::OutOfRange { index: from, len: slides.len() });
    }
    let slide = slides.remove(from);
    let to = to.min(slides.len());
    slides.insert(to, slide);
    renumber(slides);
    Ok(to)
}

/// Clamp an editor's active slide index after the collection shrank to `len`.
/// `None` means there is no slide to show.
pub fn clamp_active(active: usize, len: usize) -> Option<usize> {
    if len == 0 { None } else { Some(active.min(len - 1)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slide::validate::normalize_slide;
    use proptest::prelude::*;
    use serde_json::json;

    fn deck(ids: &[&str]) -> Vec<Slide> {
        let mut slides: Vec<Slide> = ids.iter().map(|id| normalize_slide(&json!({"id": id}))).collect();
        renumber(&mut slides);
        slides
    }

    fn ids(slides: &[Slide]) -> Vec<&str> {
        slides.iter().map(|s| s.id.as_str()).collect()
    }

    fn assert_contiguous(slides: &[Slide]) {
        for (i, slide) in slides.iter().enumerate() {
            assert_eq!(slide.order, i, "slide {} has order {}", slide.id, slide.order);
        }
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut slides = deck(&["a", "b"]);
        let at = insert_at(&mut slides, 99, normalize_slide(&json!({"id": "z"})));
        assert_eq!(at, 2);
        assert_eq!(ids(&slides), ["a", "b", "z"]);
        assert_contiguous(&slides);
    }

    #[test]
    fn test_insert_at_front() {
        let mut slides = deck(&["a", "b"]);
        insert_at(&mut slides, 0, normalize_slide(&json!({"id": "z"})));
        assert_eq!(ids(&slides), ["z", "a", "b"]);
        assert_contiguous(&slides);
    }

    #[test]
    fn test_remove_renumbers() {
        let mut slides = deck(&["a", "b", "c"]);
        let removed = remove_at(&mut slides, 1).unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(ids(&slides), ["a", "c"]);
        assert_contiguous(&slides);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut empty: Vec<Slide> = Vec::new();
        assert!(matches!(remove_at(&mut empty, 0), Err(AppError::OutOfRange { index: 0, len: 0 })));

        let mut slides = deck(&["a"]);
        assert!(matches!(remove_at(&mut slides, 1), Err(AppError::OutOfRange { .. })));
        assert_eq!(ids(&slides), ["a"]);
    }

    #[test]
    fn test_move_forward_and_back() {
        let mut slides = deck(&["a", "b", "c", "d"]);
        assert_eq!(move_to(&mut slides, 0, 2).unwrap(), 2);
        assert_eq!(ids(&slides), ["b", "c", "a", "d"]);
        assert_eq!(move_to(&mut slides, 3, 0).unwrap(), 0);
        assert_eq!(ids(&slides), ["d", "b", "c", "a"]);
        assert_eq!(move_to(&mut slides, 1, 50).unwrap(), 3);
        assert_eq!(ids(&slides), ["d", "c", "a", "b"]);
        assert_contiguous(&slides);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut slides = deck(&["a"]);
        assert!(move_to(&mut slides, 4, 0).is_err());
    }

    #[test]
    fn test_clamp_active() {
        assert_eq!(clamp_active(3, 3), Some(2));
        assert_eq!(clamp_active(1, 3), Some(1));
        assert_eq!(clamp_active(0, 0), None);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(usize),
        Remove(usize),
        Move(usize, usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..12).prop_map(Op::Insert),
            (0usize..12).prop_map(Op::Remove),
            (0usize..12, 0usize..12).prop_map(|(from, to)| Op::Move(from, to)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// After every insert, remove or move, `order` equals the position.
        #[test]
        fn prop_order_matches_position(ops in prop::collection::vec(op_strategy(), 0..60)) {
            let mut slides: Vec<Slide> = Vec::new();
            for (step, op) in ops.into_iter().enumerate() {
                let before = slides.len();
                match op {
                    Op::Insert(index) => {
                        let slide = normalize_slide(&json!({"id": format!("s{step}")}));
                        let at = insert_at(&mut slides, index, slide);
                        prop_assert_eq!(at, index.min(before));
                        prop_assert_eq!(slides.len(), before + 1);
                    }
                    Op::Remove(index) => match remove_at(&mut slides, index) {
                        Ok(_) => prop_assert!(index < before && slides.len() == before - 1),
                        Err(AppError::OutOfRange { .. }) => {
                            prop_assert!(index >= before && slides.len() == before)
                        }
                        Err(other) => prop_assert!(false, "unexpected error {}", other),
                    },
                    Op::Move(from, to) => match move_to(&mut slides, from, to) {
                        Ok(landed) => prop_assert_eq!(landed, to.min(before - 1)),
                        Err(AppError::OutOfRange { .. }) => prop_assert!(from >= before),
                        Err(other) => prop_assert!(false, "unexpected error {}", other),
                    },
                }
                for (index, slide) in slides.iter().enumerate() {
                    prop_assert_eq!(slide.order, index);
                }
            }
        }
    }
}
