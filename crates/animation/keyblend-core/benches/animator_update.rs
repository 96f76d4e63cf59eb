use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use keyblend_core::{Animator, Channel, Clip, Curve, CurveBundle, Keyframe, NodeId, Rig, WrapMode};

const BONE_COUNT_SAMPLES: &[usize] = &[16, 64, 256];
const FRAME_DT: f32 = 1.0 / 60.0;

/// Single chain `Bone0/Bone1/...`, returning the root and each bone's path.
fn chain_rig(bones: usize) -> (Rig, NodeId, Vec<String>) {
    let mut rig = Rig::new();
    let root = rig.add_root("Armature");
    let mut parent = root;
    let mut path = String::new();
    let mut paths = Vec::with_capacity(bones);
    for i in 0..bones {
        let name = format!("Bone{i}");
        parent = rig.add_child(parent, &name).expect("parent exists");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(&name);
        paths.push(path.clone());
    }
    (rig, root, paths)
}

fn swing_clip(name: &str, paths: &[String], amplitude: f32) -> Clip {
    let swing = Curve::from_keys(vec![
        Keyframe::new(0.0, -amplitude, 0.0, 0.0),
        Keyframe::new(0.5, amplitude, 0.0, 0.0),
        Keyframe::new(1.0, -amplitude, 0.0, 0.0),
    ]);
    paths.iter().fold(Clip::new(name, 1.0, WrapMode::Loop), |clip, path| {
        clip.with_bundle(
            CurveBundle::new(path.as_str())
                .with_curve(Channel::LocalRotationZ, swing.clone())
                .with_curve(Channel::LocalPositionY, swing.clone()),
        )
    })
}

fn bench_single_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("animator_single_state");
    for &bones in BONE_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("bones", bones), &bones, |b, &bones| {
            let (mut rig, root, paths) = chain_rig(bones);
            let mut anim = Animator::default();
            anim.add_clip(Arc::new(swing_clip("Swing", &paths, 30.0)));
            anim.play(0, 0.0).expect("clip registered");
            // First update resolves paths; measure steady state only.
            anim.update(FRAME_DT, &mut rig, root);

            b.iter(|| {
                black_box(anim.update(black_box(FRAME_DT), &mut rig, root));
            });
        });
    }
    group.finish();
}

fn bench_crossfade(c: &mut Criterion) {
    let mut group = c.benchmark_group("animator_crossfade");
    for &bones in BONE_COUNT_SAMPLES {
        group.bench_with_input(BenchmarkId::new("bones", bones), &bones, |b, &bones| {
            let (mut rig, root, paths) = chain_rig(bones);
            let mut anim = Animator::default();
            anim.add_clip(Arc::new(swing_clip("Small", &paths, 10.0)));
            anim.add_clip(Arc::new(swing_clip("Large", &paths, 45.0)));
            anim.play(0, 0.0).expect("clip registered");
            anim.update(FRAME_DT, &mut rig, root);
            // Long enough that the fade never completes during measurement.
            anim.play(1, 1.0e6).expect("clip registered");
            anim.update(FRAME_DT, &mut rig, root);

            b.iter(|| {
                black_box(anim.update(black_box(FRAME_DT), &mut rig, root));
            });
        });
    }
    group.finish();
}

fn bench_first_update(c: &mut Criterion) {
    let (rig, root, paths) = chain_rig(64);
    let clip = Arc::new(swing_clip("Swing", &paths, 30.0));

    c.bench_function("animator_first_update_resolves", |b| {
        b.iter(|| {
            let mut rig = rig.clone();
            let mut anim = Animator::default();
            anim.add_clip(clip.clone());
            anim.play(0, 0.0).expect("clip registered");
            black_box(anim.update(FRAME_DT, &mut rig, root));
        });
    });
}

criterion_group!(
    animator_update,
    bench_single_state,
    bench_crossfade,
    bench_first_update
);
criterion_main!(animator_update);
