//! `springer_core::ai::alphabeta` の性能計測（反復深化探索）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use springer_core::ai::types::Ai;
use springer_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた局面を返す（途中で終局した場合はその時点で止める）。
fn state_after_plies(plies: u16) -> engine::State {
    let mut first_agent = ai::random::Agent::new(u64::MIN);
    let mut game = engine::Game::initial();
    let mut second_agent = ai::random::Agent::new(u64::MIN.wrapping_add(1));

    for _turn in u16::MIN..plies {
        let state = game.state();

        let mv_opt = match game.side_to_move() {
            engine::Player::First => first_agent.select_move(state),
            engine::Player::Second => second_agent.select_move(state),
            _ => None,
        };

        let mv = match mv_opt {
            Some(value) => value,
            None => break,
        };

        let status = match game.play(mv) {
            Ok(value) => value,
            Err(_err) => break,
        };

        if let engine::GameStatus::GameOver { .. } = status {
            break;
        }
    }

    game.state()
}

/// `alphabeta::Agent::select_move` を深さ別に計測する。
fn bench_select_move_by_depth(criterion: &mut Criterion) {
    let state = state_after_plies(8);
    let mut group = criterion.benchmark_group("ai/alphabeta/select_move");

    for depth in [2_u8, 4, 6] {
        let bench_id = BenchmarkId::new("depth", depth);
        group.bench_with_input(bench_id, &depth, |bench, input| {
            let limits = ai::alphabeta::SearchLimits::new(*input, true);
            bench.iter_batched(
                || ai::alphabeta::Agent::with_limits(limits, u64::MIN),
                |mut agent| black_box(agent.select_move(state)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// 枝刈りの有無による差を計測する。
fn bench_pruning_toggle(criterion: &mut Criterion) {
    let state = state_after_plies(8);
    let mut group = criterion.benchmark_group("ai/alphabeta/pruning");

    for pruning in [true, false] {
        let bench_id = BenchmarkId::new("enabled", pruning);
        group.bench_with_input(bench_id, &pruning, |bench, input| {
            let limits = ai::alphabeta::SearchLimits::new(4, *input);
            bench.iter_batched(
                || ai::alphabeta::Agent::with_limits(limits, u64::MIN),
                |mut agent| black_box(agent.select_move(state)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_select_move_by_depth(&mut criterion);
    bench_pruning_toggle(&mut criterion);

    criterion.final_summary();
}
