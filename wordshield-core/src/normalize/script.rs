//! script.rs - Traditional-to-simplified CJK folding.
//!
//! One-directional: traditional characters fold to their simplified
//! counterpart via a fixed substitution table, so a dictionary authored
//! in simplified script matches content written in traditional script.
//! Simplified input passes through untouched, which also makes the
//! fold idempotent.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{TextTransform, TransformOutput};

/// Traditional -> simplified, covering the most frequent characters.
static TRAD_TO_SIMPLIFIED: Lazy<HashMap<char, char>> = Lazy::new(|| {
    [
        ('測', '测'), ('試', '试'), ('詞', '词'),
        ('個', '个'), ('為', '为'), ('國', '国'), ('來', '来'), ('對', '对'),
        ('們', '们'), ('時', '时'), ('會', '会'), ('過', '过'), ('發', '发'),
        ('後', '后'), ('學', '学'), ('當', '当'), ('樣', '样'), ('還', '还'),
        ('現', '现'), ('與', '与'), ('關', '关'), ('開', '开'), ('動', '动'),
        ('問', '问'), ('兩', '两'), ('應', '应'), ('電', '电'), ('體', '体'),
        ('實', '实'), ('無', '无'), ('業', '业'), ('東', '东'), ('聽', '听'),
        ('長', '长'), ('見', '见'), ('書', '书'), ('頭', '头'), ('車', '车'),
        ('門', '门'), ('馬', '马'), ('號', '号'), ('義', '义'), ('親', '亲'),
        ('記', '记'), ('師', '师'), ('歲', '岁'), ('區', '区'), ('變', '变'),
        ('壓', '压'), ('產', '产'), ('聲', '声'), ('議', '议'), ('處', '处'),
        ('賣', '卖'), ('買', '买'), ('戰', '战'), ('認', '认'), ('讓', '让'),
        ('從', '从'), ('結', '结'), ('給', '给'), ('節', '节'), ('獨', '独'),
        ('飛', '飞'), ('萬', '万'), ('風', '风'), ('辦', '办'), ('務', '务'),
        ('寫', '写'), ('觀', '观'), ('習', '习'), ('報', '报'), ('場', '场'),
        ('帶', '带'), ('隊', '队'), ('導', '导'), ('經', '经'), ('運', '运'),
        ('歷', '历'), ('類', '类'), ('總', '总'), ('醫', '医'), ('張', '张'),
        ('級', '级'), ('約', '约'), ('組', '组'), ('繼', '继'), ('斷', '断'),
        ('將', '将'), ('專', '专'), ('傳', '传'), ('達', '达'), ('亞', '亚'),
        ('連', '连'), ('選', '选'), ('價', '价'), ('則', '则'), ('較', '较'),
        ('爾', '尔'), ('轉', '转'), ('規', '规'), ('參', '参'), ('標', '标'),
        ('黨', '党'), ('權', '权'), ('臺', '台'), ('灣', '湾'),
        ('統', '统'), ('復', '复'), ('興', '兴'), ('華', '华'),
    ]
    .into_iter()
    .collect()
});

/// Folds traditional-script CJK characters to simplified, 1:1.
pub struct ScriptFold;

impl TextTransform for ScriptFold {
    fn name(&self) -> &'static str {
        "script"
    }

    fn apply(&self, text: &str) -> TransformOutput {
        let mut out = String::with_capacity(text.len());
        let mut map = Vec::with_capacity(text.chars().count());
        for (i, c) in text.chars().enumerate() {
            out.push(*TRAD_TO_SIMPLIFIED.get(&c).unwrap_or(&c));
            map.push(i);
        }
        TransformOutput { text: out, map }
    }
}
