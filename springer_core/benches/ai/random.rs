//! `springer_core::ai::random` の性能計測（1手選択）。

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

/// ベンチ用に代表局面をいくつか用意する。
fn state_samples() -> [engine::State; 3] {
    let s0 = engine::State::initial();
    let s1 = state_after_plies(8);
    let s2 = state_after_plies(24);
    [s0, s1, s2]
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = state_samples();
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, state) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, state, |bench, input| {
            bench.iter_batched(
                || ai::random::Agent::new(u64::MIN),
                |mut agent| black_box(agent.select_move(*input)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
