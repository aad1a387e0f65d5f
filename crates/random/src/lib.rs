//! Random generation of every shape the shapepack codecs accept.
//!
//! Used by round-trip test matrices and by benchmark dataset producers.
//! Every generator has a `*_with` variant taking a caller-supplied RNG so
//! a run can be seeded and reproduced exactly; the plain variants draw
//! from the thread RNG.

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

use shapepack::{DeepChain, LabeledTree, Value};

/// Relative weights for each value kind when growing a random tree.
///
/// A weight of zero removes the kind entirely. Containers are suppressed
/// automatically once the depth budget is spent, whatever their weight.
#[derive(Debug, Clone, Copy)]
pub struct NodeOdds {
    pub null: u32,
    pub boolean: u32,
    pub integer: u32,
    pub float: u32,
    pub text: u32,
    pub list: u32,
    pub map: u32,
}

impl Default for NodeOdds {
    fn default() -> Self {
        Self {
            null: 1,
            boolean: 2,
            integer: 5,
            float: 4,
            text: 4,
            list: 3,
            map: 3,
        }
    }
}

/// Options for [`random_value`].
#[derive(Debug, Clone, Copy)]
pub struct RandomValueOptions {
    /// Maximum container nesting below the root.
    pub max_depth: usize,
    /// Maximum children per list or map.
    pub max_width: usize,
    /// Maximum generated text and key length.
    pub max_text_len: usize,
    pub odds: NodeOdds,
}

impl Default for RandomValueOptions {
    fn default() -> Self {
        Self {
            max_depth: 6,
            max_width: 8,
            max_text_len: 12,
            odds: NodeOdds::default(),
        }
    }
}

/// Generates one random value with the thread RNG.
pub fn random_value(options: &RandomValueOptions) -> Value {
    random_value_with(&mut thread_rng(), options)
}

/// Generates one random value from the given RNG.
///
/// Integers are built through [`Value::int`], so the result is canonical:
/// width always follows magnitude.
pub fn random_value_with<R: Rng>(rng: &mut R, options: &RandomValueOptions) -> Value {
    gen_value(rng, options, options.max_depth)
}

fn gen_value<R: Rng>(rng: &mut R, options: &RandomValueOptions, depth_left: usize) -> Value {
    let mut odds = options.odds;
    if depth_left == 0 {
        odds.list = 0;
        odds.map = 0;
    }
    let total = odds.null + odds.boolean + odds.integer + odds.float + odds.text + odds.list
        + odds.map;
    // All-zero odds would leave nothing to pick.
    let total = total.max(1);
    let mut roll = rng.gen_range(0..total);

    for (weight, kind) in [
        (odds.null, Kind::Null),
        (odds.boolean, Kind::Boolean),
        (odds.integer, Kind::Integer),
        (odds.float, Kind::Float),
        (odds.text, Kind::Text),
        (odds.list, Kind::List),
        (odds.map, Kind::Map),
    ] {
        if roll < weight {
            return gen_kind(rng, options, depth_left, kind);
        }
        roll -= weight;
    }
    Value::Null
}

#[derive(Clone, Copy)]
enum Kind {
    Null,
    Boolean,
    Integer,
    Float,
    Text,
    List,
    Map,
}

fn gen_kind<R: Rng>(
    rng: &mut R,
    options: &RandomValueOptions,
    depth_left: usize,
    kind: Kind,
) -> Value {
    match kind {
        Kind::Null => Value::Null,
        Kind::Boolean => Value::Bool(rng.gen()),
        // Half small so both integer widths show up.
        Kind::Integer => Value::int(if rng.gen_bool(0.5) {
            rng.gen_range(-1_000_000..=1_000_000)
        } else {
            rng.gen()
        }),
        Kind::Float => Value::Float64(rng.gen_range(-1.0e9..1.0e9)),
        Kind::Text => {
            let len = rng.gen_range(0..=options.max_text_len);
            Value::Text(random_text(rng, len))
        }
        Kind::List => {
            let width = rng.gen_range(0..=options.max_width);
            Value::List(
                (0..width)
                    .map(|_| gen_value(rng, options, depth_left - 1))
                    .collect(),
            )
        }
        Kind::Map => {
            let width = rng.gen_range(0..=options.max_width);
            Value::Map(
                (0..width)
                    .map(|_| {
                        let key_len = rng.gen_range(1..=options.max_text_len.max(1));
                        (
                            random_text(rng, key_len),
                            gen_value(rng, options, depth_left - 1),
                        )
                    })
                    .collect(),
            )
        }
    }
}

/// An alphanumeric string of exactly `len` characters.
pub fn random_text<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// An integer chain of `depth` inner levels over a leaf of `len` values.
pub fn random_int_chain(depth: usize, len: usize) -> DeepChain<i64> {
    random_int_chain_with(&mut thread_rng(), depth, len)
}

pub fn random_int_chain_with<R: Rng>(rng: &mut R, depth: usize, len: usize) -> DeepChain<i64> {
    DeepChain::wrapped(depth, random_int_list_with(rng, len))
}

/// A float chain of `depth` inner levels over a leaf of `len` values.
pub fn random_float_chain(depth: usize, len: usize) -> DeepChain<f64> {
    random_float_chain_with(&mut thread_rng(), depth, len)
}

pub fn random_float_chain_with<R: Rng>(rng: &mut R, depth: usize, len: usize) -> DeepChain<f64> {
    DeepChain::wrapped(depth, random_float_list_with(rng, len))
}

/// A flat list of `len` full-range integers.
pub fn random_int_list(len: usize) -> Vec<i64> {
    random_int_list_with(&mut thread_rng(), len)
}

pub fn random_int_list_with<R: Rng>(rng: &mut R, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen()).collect()
}

/// A flat list of `len` finite floats.
pub fn random_float_list(len: usize) -> Vec<f64> {
    random_float_list_with(&mut thread_rng(), len)
}

pub fn random_float_list_with<R: Rng>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-1.0e9..1.0e9)).collect()
}

/// A labeled tree of `node_count` nodes (at least one) with at most
/// `max_children` children per node.
pub fn random_tree(node_count: usize, max_children: usize) -> LabeledTree {
    random_tree_with(&mut thread_rng(), node_count, max_children)
}

/// Grows the tree by attaching each new node under a uniformly chosen
/// node that still has a free child slot, then assembles the owned
/// structure bottom-up; children always carry a higher index than their
/// parent, so a reverse pass builds every child before its parent.
pub fn random_tree_with<R: Rng>(
    rng: &mut R,
    node_count: usize,
    max_children: usize,
) -> LabeledTree {
    let node_count = node_count.max(1);
    let max_children = max_children.max(1);

    let labels: Vec<i64> = (0..node_count).map(|_| rng.gen()).collect();
    let mut children_of: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut open = vec![0usize];

    for index in 1..node_count {
        let slot = rng.gen_range(0..open.len());
        let parent = open[slot];
        children_of[parent].push(index);
        if children_of[parent].len() >= max_children {
            open.swap_remove(slot);
        }
        open.push(index);
    }

    let mut built: Vec<LabeledTree> = labels.into_iter().map(LabeledTree::leaf).collect();
    for index in (0..node_count).rev() {
        if children_of[index].is_empty() {
            continue;
        }
        let mut children = Vec::with_capacity(children_of[index].len());
        for &child in &children_of[index] {
            children.push(std::mem::replace(&mut built[child], LabeledTree::leaf(0)));
        }
        built[index].children = children;
    }
    built.swap_remove(0)
}
