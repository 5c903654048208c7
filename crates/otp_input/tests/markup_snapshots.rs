//! Snapshot tests for the markup and terminal view.
//!
//! Uses insta inline snapshots so the expected output lives next to the
//! scenario that produces it.
//!
//! # Running
//!
//! ```bash
//! cargo test -p otp_input --test markup_snapshots
//!
//! # Update snapshots:
//! cargo insta test -p otp_input --test markup_snapshots
//! cargo insta review
//! ```

use otp_input::prelude::*;
use otp_input::tree::standard_layout;

fn otp(length: usize, value: &str) -> Otp {
    let mut otp = Otp::builder()
        .children(standard_layout(length, "|"))
        .value(value)
        .styles(Styles::plain())
        .caret_mode(CaretMode::Static)
        .build()
        .unwrap();
    otp.init();
    otp
}

#[test]
fn snapshot_markup_unfocused() {
    let otp = otp(4, "12");
    insta::assert_snapshot!(
        otp.markup().to_string(),
        @r#"<div data-qds-otp-root><input data-qds-otp-hidden-input data-shift inputmode="numeric" maxlength="4" value="12"><div><div data-qds-otp-item="0">1<span data-qds-otp-caret="0"></span></div><div data-qds-otp-item="1">2<span data-qds-otp-caret="1"></span></div><div data-qds-otp-item="2"><span data-qds-otp-caret="2"></span></div><div data-qds-otp-item="3"><span data-qds-otp-caret="3"></span></div></div></div>"#
    );
}

#[test]
fn snapshot_markup_focused_insertion_point() {
    let mut otp = otp(4, "12");
    otp.update(InputEvent::Focus);
    insta::assert_snapshot!(
        otp.markup().to_string(),
        @r#"<div data-qds-otp-root><input data-qds-otp-hidden-input data-shift inputmode="numeric" maxlength="4" value="12"><div><div data-qds-otp-item="0">1<span data-qds-otp-caret="0"></span></div><div data-qds-otp-item="1">2<span data-qds-otp-caret="1"></span></div><div data-qds-otp-item="2" data-highlighted><span data-qds-otp-caret="2">|</span></div><div data-qds-otp-item="3"><span data-qds-otp-caret="3"></span></div></div></div>"#
    );
}

#[test]
fn snapshot_markup_disabled_with_pattern_and_separator() {
    let mut otp = Otp::builder()
        .child(Node::hidden_input_with_pattern("^[A-Z]*$"))
        .child(Node::row([Node::item(), Node::text("-"), Node::item()]))
        .value("Q")
        .disabled(true)
        .shift_password_managers(false)
        .build()
        .unwrap();
    otp.init();
    insta::assert_snapshot!(
        otp.markup().to_string(),
        @r#"<div data-qds-otp-root data-disabled><input data-qds-otp-hidden-input inputmode="numeric" pattern="^[A-Z]*$" maxlength="2" value="Q" disabled><div><div data-qds-otp-item="0" data-disabled>Q</div>-<div data-qds-otp-item="1" data-disabled></div></div></div>"#
    );
}

#[test]
fn snapshot_view_shift_range() {
    let mut otp = otp(6, "123456");
    otp.update(InputEvent::Focus);
    assert_eq!(otp.view(), "[1] [2] [3] [4] [5] [6]");

    otp.update(InputEvent::KeyDown(KeyEvent::new(Key::Shift)));
    otp.update(InputEvent::KeyDown(KeyEvent::new(Key::Left).with_shift()));
    let highlighted: String = otp
        .cells()
        .iter()
        .map(|c| if c.is_highlighted() { '^' } else { '.' })
        .collect();
    insta::assert_snapshot!(highlighted, @"....^^");
}

#[test]
fn snapshot_view_column_layout() {
    let mut otp = Otp::builder()
        .child(Node::hidden_input())
        .child(Node::column([
            Node::row([Node::item_with_caret("_"), Node::item_with_caret("_")]),
            Node::row([Node::item_with_caret("_"), Node::item_with_caret("_")]),
        ]))
        .styles(Styles::plain())
        .caret_mode(CaretMode::Static)
        .build()
        .unwrap();
    otp.update(InputEvent::Focus);
    otp.update(InputEvent::Paste("12".into()));
    insta::assert_snapshot!(otp.view(), @r"
    [1] [2]
    [_] [ ]
    ");
}
