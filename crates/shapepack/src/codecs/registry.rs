//! Aggregate codec holder.

use super::{ChainBinCodec, FlatListBinCodec, TreeBinCodec, ValueBinCodec};

/// One codec per dataset kind a benchmark run touches.
pub struct Codecs {
    pub value: ValueBinCodec,
    pub int_chain: ChainBinCodec<i64>,
    pub float_chain: ChainBinCodec<f64>,
    pub int_list: FlatListBinCodec<i64>,
    pub float_list: FlatListBinCodec<f64>,
    pub tree: TreeBinCodec,
}

impl Default for Codecs {
    fn default() -> Self {
        Self::new()
    }
}

impl Codecs {
    pub fn new() -> Self {
        Self {
            value: ValueBinCodec::new(),
            int_chain: ChainBinCodec::new(),
            float_chain: ChainBinCodec::new(),
            int_list: FlatListBinCodec::new(),
            float_list: FlatListBinCodec::new(),
            tree: TreeBinCodec::new(),
        }
    }
}
