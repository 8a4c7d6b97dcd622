//! Dialogue playback driven through the virtual timer queue

use std::cell::RefCell;
use std::rc::Rc;

use pixelfolio::config::DialogueSettings;
use pixelfolio::dialogue::{
    Advance, AnchorRect, BubbleId, BubbleLayer, BubblePlacement, Node, Pacing, RevealState,
    SpeechBubbles, Transcript,
};
use pixelfolio::{Config, TimerQueue, Typewriter};

fn typewriter(settings: &DialogueSettings) -> Typewriter<Transcript, TimerQueue> {
    Typewriter::new(Transcript::new(), TimerQueue::new(), Pacing::from(settings))
}

/// Fire every pending timer, returning when the last one fired
fn drain(tw: &mut Typewriter<Transcript, TimerQueue>) -> u64 {
    while let Some(id) = tw.scheduler_mut().pop_next() {
        tw.on_timer(id);
    }
    tw.scheduler().now_ms()
}

#[test]
fn test_intro_dialogue_plays_in_order() {
    let finished = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&finished);
    let mut tw = typewriter(&DialogueSettings::default());

    tw.start(
        [
            "Greetings, traveler! I am <span>Andy</span>.",
            "Want to explore my realm?",
        ],
        move || *flag.borrow_mut() = true,
    );

    drain(&mut tw);
    assert_eq!(tw.state(), RevealState::Completed);
    assert_eq!(
        tw.surface().markup(),
        "Greetings, traveler! I am <span>Andy</span>."
    );

    assert_eq!(tw.advance(), Advance::Next);
    drain(&mut tw);
    assert_eq!(tw.surface().plain_text(), "Want to explore my realm?");

    assert_eq!(tw.advance(), Advance::Finished);
    assert!(*finished.borrow());
}

#[test]
fn test_line_duration_follows_pacing() {
    let mut tw = typewriter(&DialogueSettings::default());
    tw.reveal("Ok, go!");

    // O k , _ g o ! -> 30 30 60 30 30 30 150, then 1000 cursor linger
    let reveal_ms = 30 + 30 + 60 + 30 + 30 + 30 + 150;
    assert_eq!(drain(&mut tw), reveal_ms + 1000);
}

#[test]
fn test_configured_pacing_is_used() {
    let config: Config = toml::from_str(
        r#"
        [dialogue]
        char_delay_ms = 10
        cursor_linger_ms = 0
        "#,
    )
    .unwrap();
    let mut tw = typewriter(&config.dialogue);
    tw.reveal("abc.");

    assert_eq!(drain(&mut tw), 10 + 10 + 10 + 50);
}

#[test]
fn test_skip_mid_span() {
    let mut tw = typewriter(&DialogueSettings::default());
    tw.reveal("I made <b>mods</b> with 20,000 downloads.");
    for _ in 0..9 {
        let id = tw.scheduler_mut().pop_next().unwrap();
        tw.on_timer(id);
    }

    assert_eq!(tw.advance(), Advance::Skipped);
    assert_eq!(
        tw.surface().nodes(),
        &[
            Node::Text("I made ".to_string()),
            Node::Span {
                style: "b".to_string(),
                text: "mods".to_string()
            },
            Node::Text(" with 20,000 downloads.".to_string()),
        ]
    );
    assert!(tw.scheduler().is_empty());
}

#[derive(Default)]
struct Layer(Vec<(String, Option<BubblePlacement>)>);

impl BubbleLayer for Layer {
    fn show(&mut self, _id: BubbleId, text: &str, placement: Option<BubblePlacement>) {
        self.0.push((text.to_string(), placement));
    }

    fn fade(&mut self, _id: BubbleId) {}

    fn remove(&mut self, _id: BubbleId) {}
}

#[test]
fn test_bubbles_share_timers_with_typewriter() {
    let settings = DialogueSettings::default();
    let mut tw = typewriter(&settings);
    let mut bubbles = SpeechBubbles::new(Layer::default(), &settings);

    tw.reveal("Hi");
    let anchor = AnchorRect {
        left: 10.0,
        top: 50.0,
        width: 20.0,
        height: 20.0,
    };
    bubbles.show(tw.scheduler_mut(), "...?", Some(anchor), Some(100));

    while let Some(id) = tw.scheduler_mut().pop_next() {
        if !tw.on_timer(id) {
            assert!(bubbles.on_timer(tw.scheduler_mut(), id));
        }
    }

    assert_eq!(tw.surface().plain_text(), "Hi");
    assert_eq!(bubbles.live_count(), 0);
    assert_eq!(
        bubbles.layer().0,
        vec![("...?".to_string(), Some(BubblePlacement { x: 20.0, y: 30.0 }))]
    );
}
