//! Regularly broadcast programmes.
//!
//! Titles of recurring radio shows, web streams and TV episodes as they
//! appear on the schedule. `.{1,2}` stands for an episode number.

use std::sync::LazyLock;

use regex::Regex;

const REGULAR_PROGRAMS: &[&str] = &[
    r"^デレラジ$",
    r"^THE IDOLM@STER STATION!!\+$",
    r"^ラジオdeアイマchu!!$",
    r"^アイマスタジオ$",
    r"^【CINDERELLA Night】デレラジA$",
    r"^CINDERELLA PARTY!$",
    r"^THE IDOLM@STER STATION!!!$",
    r"^ミリオンラジオ！$",
    r"^アイドルマスター シンデレラガールズ .{1,2}話放送$",
    r"^アイドルマスター シンデレラガールズ .{1,2}話配信（バンダイチャンネル）$",
    r"^【CINDERELLA Night】アイドルマスター シンデレラガールズ .{1,2}話配信（ニコ生）$",
    r"^「リスアニ！TV」TVAシンデレラガールズコーナー$",
    r"^315プロNight!$",
    r"^アイドルマスター .{1,2}話放送（再放送）$",
    r"^アイドルマスター シンデレラガールズ　.{1,2}話放送（再放送）$",
    r"^デレラジ☆（スター）$",
    r"^TVアニメ「アイドルマスター シンデレラガールズ」2nd SEASON$",
    r"^シンデレラガールズ劇場 第.{1,2}話放送$",
    r"^アニメ アイドルマスター SideM 第.{1,2}話放送$",
    r"^アイドルマスター シャイニーカラーズ はばたきラジオステーション$",
    r"^アニメ　アイドルマスター SideM　理由あってMini!　第.{1,2}話放送$",
    r"^THE IDOLM@STER MUSIC ON THE RADIO$",
];

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    REGULAR_PROGRAMS
        .iter()
        .map(|p| Regex::new(p).expect("valid programme pattern"))
        .collect()
});

/// Whether `title` names a regularly broadcast programme.
pub fn is_regular_program(title: &str) -> bool {
    PATTERNS.iter().any(|re| re.is_match(title))
}
