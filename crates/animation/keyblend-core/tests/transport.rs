use std::sync::Arc;

use keyblend_core::{
    AnimError, Animator, AnimatorCommand, AnimatorEvent, Channel, Clip, Curve, CurveBundle,
    FadeState, Keyframe, NodeId, Rig, WrapMode,
};

fn mk_clip(name: &str, length: f32, mode: WrapMode) -> Clip {
    let ramp = Curve::from_keys(vec![
        Keyframe::new(0.0, 0.0, 0.0, 0.0),
        Keyframe::new(length, length, 0.0, 0.0),
    ]);
    Clip::new(name, length, mode)
        .with_bundle(CurveBundle::new("").with_curve(Channel::LocalPositionZ, ramp))
}

fn setup() -> (Animator, Rig, NodeId) {
    let mut rig = Rig::new();
    let root = rig.add_root("Root");
    let mut anim = Animator::default();
    anim.add_clip(Arc::new(mk_clip("Idle", 2.0, WrapMode::Loop)));
    anim.add_clip(Arc::new(mk_clip("Run", 2.0, WrapMode::Loop)));
    anim.add_clip(Arc::new(mk_clip("Hop", 1.0, WrapMode::Once)));
    (anim, rig, root)
}

#[test]
fn stop_clears_every_state_on_next_update() {
    let (mut anim, mut rig, root) = setup();
    anim.play(0, 0.0).unwrap();
    anim.update(0.25, &mut rig, root);
    anim.play(1, 1.0).unwrap();
    anim.update(0.25, &mut rig, root);
    anim.play(2, 1.0).unwrap();
    assert_eq!(anim.states().len(), 3);

    anim.stop();
    assert_eq!(anim.states().len(), 3, "stop is deferred to the next update");
    let out = anim.update(0.25, &mut rig, root).clone();
    assert!(anim.states().is_empty());
    assert!(out.events.contains(&AnimatorEvent::Stopped { cleared: 1 }));
    // States sampled during the stopping pass are reset to clip start.
    assert_eq!(rig.node(root).unwrap().position[2], 0.0);
}

#[test]
fn stop_with_single_state() {
    let (mut anim, mut rig, root) = setup();
    anim.play(0, 0.0).unwrap();
    anim.update(0.5, &mut rig, root);
    anim.stop();
    anim.update(0.5, &mut rig, root);
    assert!(anim.states().is_empty());
    assert!(anim.is_stopped());
    assert!(!anim.is_playing());

    // Later updates keep the list empty and do not repeat the event.
    let out = anim.update(0.5, &mut rig, root);
    assert!(out.is_empty());
}

#[test]
fn play_after_stop_restarts() {
    let (mut anim, mut rig, root) = setup();
    anim.play(0, 0.0).unwrap();
    anim.stop();
    anim.update(0.5, &mut rig, root);
    anim.play(1, 0.5).unwrap();
    assert!(!anim.is_stopped());
    assert_eq!(anim.states().len(), 1);
    assert_eq!(anim.states()[0].fade_state, FadeState::Normal);
}

#[test]
fn pause_freezes_time_and_play_resumes_same_clip() {
    let (mut anim, mut rig, root) = setup();
    anim.play(0, 0.0).unwrap();
    anim.update(0.5, &mut rig, root);
    anim.pause();
    anim.update(0.5, &mut rig, root);
    assert_eq!(anim.time(), 0.5);
    assert_eq!(anim.current_playing_time(), Some(0.5));

    let start = anim.states()[0].play_start_time;
    anim.play(0, 0.0).unwrap();
    assert!(!anim.is_paused());
    assert_eq!(anim.states().len(), 1);
    assert_eq!(anim.states()[0].play_start_time, start);

    anim.update(0.25, &mut rig, root);
    assert_eq!(anim.current_playing_time(), Some(0.75));
    assert_eq!(rig.node(root).unwrap().position[2], 0.75);
}

#[test]
fn play_other_clip_while_paused_restarts() {
    let (mut anim, mut rig, root) = setup();
    anim.play(0, 0.0).unwrap();
    anim.update(0.5, &mut rig, root);
    anim.pause();
    anim.play(1, 0.0).unwrap();
    assert!(!anim.is_paused());
    assert_eq!(anim.current_clip_index(), Some(1));
    assert_eq!(anim.states()[0].play_start_time, 0.5);
}

#[test]
fn seek_replaces_the_next_time_step() {
    let (mut anim, mut rig, root) = setup();
    anim.play(0, 0.0).unwrap();
    anim.update(0.5, &mut rig, root);
    anim.set_playing_time(1.5);
    assert_eq!(anim.pending_seek(), Some(1.5));

    anim.update(100.0, &mut rig, root);
    assert_eq!(anim.time(), 1.5);
    assert_eq!(anim.current_playing_time(), Some(1.5));
    assert_eq!(anim.pending_seek(), None);
    assert_eq!(rig.node(root).unwrap().position[2], 1.5);

    anim.update(0.25, &mut rig, root);
    assert_eq!(anim.current_playing_time(), Some(1.75));
}

#[test]
fn seek_applies_while_paused() {
    let (mut anim, mut rig, root) = setup();
    anim.play(0, 0.0).unwrap();
    anim.update(1.0, &mut rig, root);
    anim.pause();
    anim.set_playing_time(0.25);
    anim.update(0.5, &mut rig, root);
    assert_eq!(anim.current_playing_time(), Some(0.25));
    anim.update(0.5, &mut rig, root);
    assert_eq!(anim.current_playing_time(), Some(0.25));
}

#[test]
fn seek_clamps_to_foreground_clip_length() {
    let (mut anim, mut rig, root) = setup();
    anim.play(2, 0.0).unwrap();
    anim.set_playing_time(9.0);
    anim.update(0.0, &mut rig, root);
    assert_eq!(anim.time(), 1.0);
    // The Once clip reached its end during the seek pass.
    assert!(anim.states().is_empty());
}

#[test]
fn invalid_clip_index_is_an_error() {
    let (mut anim, _, _) = setup();
    assert_eq!(
        anim.play(7, 0.0),
        Err(AnimError::InvalidClipIndex { index: 7, len: 3 })
    );
    assert!(anim
        .apply(AnimatorCommand::Play {
            clip_index: 3,
            fade_length: 0.0,
        })
        .is_err());
    assert!(!anim.is_started());
}

#[test]
fn commands_deserialize_from_json() {
    let (mut anim, mut rig, root) = setup();
    let cmds: Vec<AnimatorCommand> = serde_json::from_str(
        r#"[
            { "Play": { "clip_index": 1 } },
            { "SetPlayingTime": { "time": 0.5 } }
        ]"#,
    )
    .unwrap();
    for cmd in cmds {
        anim.apply(cmd).unwrap();
    }
    anim.update(0.0, &mut rig, root);
    assert_eq!(anim.current_clip_index(), Some(1));
    assert_eq!(anim.current_playing_time(), Some(0.5));
}

#[test]
fn queries_follow_the_newest_state() {
    let (mut anim, mut rig, root) = setup();
    assert_eq!(anim.current_clip_index(), None);
    assert_eq!(anim.current_playing_time(), None);
    anim.play(0, 0.0).unwrap();
    anim.play(1, 0.5).unwrap();
    anim.update(0.25, &mut rig, root);
    assert_eq!(anim.current_clip().map(|c| c.name.as_str()), Some("Run"));
    assert_eq!(anim.clip_index_of("Hop"), Some(2));
    assert_eq!(anim.clip_length(2), Some(1.0));
    assert!(anim.is_playing());
}
