use fringetree::{Count, FringeTree, Measured, Minimum, Node, Sum, View};
use proptest::prelude::*;

/// Plain model of a tree shape, independent of any binding.
#[derive(Debug, Clone)]
enum Shape {
    Empty,
    Leaf(i32),
    Branch(Box<Shape>, Box<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    let base = prop_oneof![
        1 => Just(Shape::Empty),
        4 => (-1_000i32..1_000).prop_map(Shape::Leaf),
    ];
    base.prop_recursive(6, 64, 2, |inner| {
        (inner.clone(), inner).prop_map(|(l, r)| Shape::Branch(Box::new(l), Box::new(r)))
    })
}

fn build<M: Measured<i32> + Clone>(binding: &M, shape: &Shape) -> FringeTree<i32, M> {
    match shape {
        Shape::Empty => FringeTree::empty(binding.clone()),
        Shape::Leaf(v) => FringeTree::leaf(binding.clone(), *v),
        Shape::Branch(l, r) => FringeTree::branch(build(binding, l), build(binding, r)),
    }
}

fn elements(shape: &Shape) -> Vec<i32> {
    match shape {
        Shape::Empty => vec![],
        Shape::Leaf(v) => vec![*v],
        Shape::Branch(l, r) => {
            let mut out = elements(l);
            out.extend(elements(r));
            out
        }
    }
}

fn model_depth(shape: &Shape) -> usize {
    match shape {
        Shape::Empty => 0,
        Shape::Leaf(_) => 1,
        Shape::Branch(l, r) => 1 + model_depth(l).max(model_depth(r)),
    }
}

/// Every reachable node carries the tag its binding would compute.
fn tags_consistent<M>(binding: &M, node: &Node<i32, M::Tag>) -> bool
where
    M: Measured<i32>,
    M::Tag: PartialEq,
{
    match node {
        Node::Empty { tag } => *tag == binding.identity(),
        Node::Leaf { tag, value } => *tag == binding.measure(value),
        Node::Branch { tag, left, right } => {
            *tag == binding.combine(left.tag(), right.tag())
                && tags_consistent(binding, left)
                && tags_consistent(binding, right)
        }
    }
}

proptest! {
    #[test]
    fn breadth_is_flatten_length(s in shape()) {
        let t = build(&Count, &s);
        prop_assert_eq!(t.breadth(), t.flatten().len());
        prop_assert_eq!(t.flatten(), elements(&s));
    }

    #[test]
    fn depth_follows_recursive_definition(s in shape()) {
        prop_assert_eq!(build(&Count, &s).depth(), model_depth(&s));
    }

    #[test]
    fn prepend_and_append_add_one_end(s in shape(), v in any::<i32>()) {
        let t = build(&Count, &s);
        let mut front = vec![v];
        front.extend(elements(&s));
        prop_assert_eq!(t.prepend(v).flatten(), front);

        let mut back = elements(&s);
        back.push(v);
        prop_assert_eq!(t.append(v).flatten(), back);
    }

    #[test]
    fn views_split_off_ends(s in shape()) {
        let t = build(&Count, &s);
        let items = elements(&s);

        match (t.view_l(), items.split_first()) {
            (View::Cons(h, rest), Some((first, others))) => {
                prop_assert_eq!(h, *first);
                prop_assert_eq!(rest.flatten(), others.to_vec());
            }
            (View::Nil, None) => {}
            (view, _) => prop_assert!(false, "left view {:?} for {:?}", view, items),
        }

        match (t.view_r(), items.split_last()) {
            (View::Cons(h, rest), Some((last, others))) => {
                prop_assert_eq!(h, *last);
                prop_assert_eq!(rest.flatten(), others.to_vec());
            }
            (View::Nil, None) => {}
            (view, _) => prop_assert!(false, "right view {:?} for {:?}", view, items),
        }

        prop_assert_eq!(t.is_empty(), items.is_empty());
        prop_assert_eq!(t.head().ok(), items.first());
        prop_assert_eq!(t.last().ok(), items.last());
    }

    #[test]
    fn concat_preserves_order(a in shape(), b in shape(), c in shape()) {
        let (ta, tb, tc) = (build(&Count, &a), build(&Count, &b), build(&Count, &c));

        let mut ab = elements(&a);
        ab.extend(elements(&b));
        prop_assert_eq!(ta.concat(&tb).flatten(), ab);

        let left = ta.concat(&tb).concat(&tc);
        let right = ta.concat(&tb.concat(&tc));
        prop_assert_eq!(left.flatten(), right.flatten());
        prop_assert_eq!(left.measure(), right.measure());
    }

    #[test]
    fn count_measure_is_breadth(s in shape(), v in any::<i32>()) {
        let t = build(&Count, &s).prepend(v).append(v);
        prop_assert_eq!(t.measure(), t.breadth());
    }

    #[test]
    fn minimum_measure_is_smallest_leaf(s in shape()) {
        let t = build(&Minimum::<i32>::new(), &s);
        let expected = elements(&s).into_iter().min().unwrap_or(i32::MAX);
        prop_assert_eq!(t.measure(), expected);
    }

    #[test]
    fn every_edit_keeps_tags_consistent(s in shape(), v in any::<i32>()) {
        let sum = Sum::<i64>::new();
        let t = build(&Minimum::<i32>::new(), &s);
        let min = t.binding().clone();

        for edited in [t.prepend(v), t.append(v), t.concat(&t)] {
            prop_assert!(tags_consistent(&min, edited.node()));
        }
        if let Ok(rest) = t.tail() {
            prop_assert!(tags_consistent(&min, rest.node()));
        }
        if let Ok(rest) = t.init() {
            prop_assert!(tags_consistent(&min, rest.node()));
        }

        let summed = FringeTree::from_values(sum, elements(&s).into_iter().map(i64::from));
        prop_assert_eq!(summed.measure(), elements(&s).iter().map(|&x| i64::from(x)).sum::<i64>());
    }

    #[test]
    fn from_values_is_balanced(values in proptest::collection::vec(any::<i32>(), 0..200)) {
        let t = FringeTree::from_values(Count, values.clone());
        prop_assert_eq!(t.flatten(), values.clone());
        let bound = if values.is_empty() {
            0
        } else {
            (values.len() as f64).log2().ceil() as usize + 1
        };
        prop_assert_eq!(t.depth(), bound);
    }
}
