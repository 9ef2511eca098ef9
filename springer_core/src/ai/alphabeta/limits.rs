use crate::engine::types::Player;

/// 探索の制限と設定。
#[derive(Clone, Copy, Debug)]
pub struct SearchLimits {
    /// 探索の最大深さ（ply）。
    max_depth: u8,
    /// アルファベータ枝刈りを使うかどうか。
    pruning: bool,
}

impl SearchLimits {
    /// 探索の最大深さ（ply）を返す。
    #[inline]
    #[must_use]
    pub const fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// 探索制限を生成する。
    ///
    /// - `max_depth`: 反復深化の上限深さ（0 は 1 として扱う）
    /// - `pruning`: アルファベータ枝刈りを使うかどうか
    #[inline]
    #[must_use]
    pub const fn new(max_depth: u8, pruning: bool) -> Self {
        Self {
            max_depth: normalize_depth(max_depth),
            pruning,
        }
    }

    /// アルファベータ枝刈りを使うかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn pruning(&self) -> bool {
        self.pruning
    }
}

/// 探索深さを正規化する（0の場合は1にする）。
#[inline]
const fn normalize_depth(depth: u8) -> u8 {
    if depth == u8::MIN {
        u8::MIN.wrapping_add(1)
    } else {
        depth
    }
}

/// 探索統計。
#[derive(Default, Clone, Copy, Debug)]
pub(super) struct SearchStats {
    /// 枝刈り（カット）の回数。
    cutoffs: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈り（カット）の回数を返す。
    pub(super) const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈り（カット）の回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 探索ノード数を返す。
    pub(super) const fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// 探索実行に必要な共有コンテキスト。
pub(super) struct SearchContext {
    /// 探索制限。
    limits: SearchLimits,
    /// 評価視点となる探索側プレイヤー。
    searcher: Player,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 探索制限を返す。
    pub(super) const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// 探索コンテキストを生成する。
    pub(super) fn new(limits: SearchLimits, searcher: Player) -> Self {
        Self {
            limits,
            searcher,
            stats: SearchStats::default(),
        }
    }

    /// 評価視点となる探索側プレイヤーを返す。
    pub(super) const fn searcher(&self) -> Player {
        self.searcher
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
