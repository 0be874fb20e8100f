//! Technique catalog organized by Gokyo and Katame-waza groups, with the
//! reference videos distributed alongside the official technique sheet.

use serde::{Deserialize, Serialize};

/// Technique groups offered on the practical scoring selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TechniqueCategory {
    AshiWaza,
    KansetsuWaza,
    KoshiWaza,
    MaSutemiWaza,
    OsaekomiWaza,
    ShimeWaza,
    TeWaza,
    YokoSutemiWaza,
}

impl TechniqueCategory {
    pub const fn ordered() -> [TechniqueCategory; 8] {
        [
            TechniqueCategory::AshiWaza,
            TechniqueCategory::KansetsuWaza,
            TechniqueCategory::KoshiWaza,
            TechniqueCategory::MaSutemiWaza,
            TechniqueCategory::OsaekomiWaza,
            TechniqueCategory::ShimeWaza,
            TechniqueCategory::TeWaza,
            TechniqueCategory::YokoSutemiWaza,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            TechniqueCategory::AshiWaza => "Ashi-waza",
            TechniqueCategory::KansetsuWaza => "Kansetsu-waza",
            TechniqueCategory::KoshiWaza => "Koshi-waza",
            TechniqueCategory::MaSutemiWaza => "Ma-sutemi-waza",
            TechniqueCategory::OsaekomiWaza => "Osaekomi-waza",
            TechniqueCategory::ShimeWaza => "Shime-waza",
            TechniqueCategory::TeWaza => "Te-waza",
            TechniqueCategory::YokoSutemiWaza => "Yoko-sutemi-waza",
        }
    }

    pub fn parse(raw: &str) -> Option<TechniqueCategory> {
        let trimmed = raw.trim();
        TechniqueCategory::ordered()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
    }

    pub const fn techniques(self) -> &'static [Technique] {
        match self {
            TechniqueCategory::AshiWaza => ASHI_WAZA,
            TechniqueCategory::KansetsuWaza => KANSETSU_WAZA,
            TechniqueCategory::KoshiWaza => KOSHI_WAZA,
            TechniqueCategory::MaSutemiWaza => MA_SUTEMI_WAZA,
            TechniqueCategory::OsaekomiWaza => OSAEKOMI_WAZA,
            TechniqueCategory::ShimeWaza => SHIME_WAZA,
            TechniqueCategory::TeWaza => TE_WAZA,
            TechniqueCategory::YokoSutemiWaza => YOKO_SUTEMI_WAZA,
        }
    }
}

/// One named technique, optionally carrying a reference video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Technique {
    pub name: &'static str,
    pub video_url: Option<&'static str>,
}

/// Category names in declared order, for selection lists.
pub fn categories() -> Vec<&'static str> {
    TechniqueCategory::ordered()
        .into_iter()
        .map(TechniqueCategory::label)
        .collect()
}

/// Techniques of a category by its display name; unknown names yield nothing.
pub fn techniques_of(category: &str) -> &'static [Technique] {
    match TechniqueCategory::parse(category) {
        Some(category) => category.techniques(),
        None => &[],
    }
}

/// Exact-name lookup within a category, used to attach reference videos.
pub fn find_technique(category: &str, name: &str) -> Option<&'static Technique> {
    techniques_of(category)
        .iter()
        .find(|technique| technique.name == name)
}

const fn t(name: &'static str, video_url: &'static str) -> Technique {
    Technique {
        name,
        video_url: Some(video_url),
    }
}

const ASHI_WAZA: &[Technique] = &[
    t("Ashi-guruma", "https://www.youtube.com/watch?v=ROeayhvom9U"),
    t("De-ashi-harai", "https://www.youtube.com/watch?v=4BUUvqxi_Kk"),
    t("Hane-goshi-gaeshi", "https://www.youtube.com/watch?v=9bZAZSBtnGs"),
    t("Harai-goshi-gaeshi", "https://www.youtube.com/watch?v=4U3It-7PPsc"),
    t("Harai-tsurikomi-ashi", "https://www.youtube.com/watch?v=gGPXvWL8VbE"),
    t("Hiza-guruma", "https://www.youtube.com/watch?v=JPJx9-oAVns"),
    t("Ko-soto-gake", "https://www.youtube.com/watch?v=8b6kY4s4zH4"),
    t("Ko-soto-gari", "https://www.youtube.com/watch?v=jeQ541ScLB4"),
    t("Ko-uchi-gari", "https://www.youtube.com/watch?v=3Jb3tZvr9Ng"),
    t("O-guruma", "https://www.youtube.com/watch?v=SnZciTAY9vc"),
    t("O-soto-gaeshi", "https://www.youtube.com/watch?v=8ZjM3X_EANo"),
    t("O-soto-gari", "https://www.youtube.com/watch?v=c-A_nP7mKAc"),
    t("O-soto-guruma", "https://www.youtube.com/watch?v=92KbCm6pQeI"),
    t("O-soto-otoshi", "https://www.youtube.com/watch?v=2DsVvDw7b8g"),
    t("O-uchi-gaeshi", "https://www.youtube.com/watch?v=dCyZTXyjIXE"),
    t("O-uchi-gari", "https://www.youtube.com/watch?v=0itJFhV9pDQ"),
    t("Okuri-ashi-harai", "https://www.youtube.com/watch?v=nw1ZdRjrdRI"),
    t("Sasae-tsurikomi-ashi", "https://www.youtube.com/watch?v=699i--pvYmE"),
    t("Tsubame-gaeshi", "https://www.youtube.com/watch?v=GwweWqqFB5g"),
    t("Uchi-mata", "https://www.youtube.com/watch?v=iUpSu5J-bgw"),
    t("Uchi-mata-gaeshi", "https://www.youtube.com/watch?v=Sy6sLWxkWYw"),
];

const KANSETSU_WAZA: &[Technique] = &[
    t("Ashi-garami", "https://www.youtube.com/watch?v=BWWb0GoAtZw"),
    t("Ude-garami", "https://www.youtube.com/watch?v=AIlTvZb4RlE"),
    t("Ude-hishigi-ashi-gatame", "https://www.youtube.com/watch?v=ClY7g_pX-4s"),
    t("Ude-hishigi-hara-gatame", "https://www.youtube.com/watch?v=ZzEycg8R_9M"),
    t("Ude-hishigi-hiza-gatame", "https://www.youtube.com/watch?v=H2HtAJdiJcE"),
    t("Ude-hishigi-juji-gatame", "https://www.youtube.com/watch?v=OWgSOlCuMXw"),
    t("Ude-hishigi-sankaku-gatame", "https://www.youtube.com/watch?v=WefAmW4azhk"),
    t("Ude-hishigi-te-gatame", "https://www.youtube.com/watch?v=6DnvhY0tQVM"),
    t("Ude-hishigi-ude-gatame", "https://www.youtube.com/watch?v=SBf0aTma1VI"),
    t("Ude-hishigi-waki-gatame", "https://www.youtube.com/watch?v=8F5p1zuJRG0"),
];

const KOSHI_WAZA: &[Technique] = &[
    t("Hane-goshi", "https://www.youtube.com/watch?v=M9_7De6A1kk"),
    t("Harai-goshi", "https://www.youtube.com/watch?v=qTo8HlAAkOo"),
    t("Koshi-guruma", "https://www.youtube.com/watch?v=SU7Id6uVJ44"),
    t("O-goshi", "https://www.youtube.com/watch?v=yhu1mfy2vJ4"),
    t("Sode-tsurikomi-goshi", "https://www.youtube.com/watch?v=QsmAxpmYLOI"),
    t("Tsuri-goshi", "https://www.youtube.com/watch?v=51Htlp7xEvE"),
    t("Tsurikomi-goshi", "https://www.youtube.com/watch?v=McfzA0yRVt4"),
    t("Uki-goshi", "https://www.youtube.com/watch?v=bPKwtB4lyOQ"),
    t("Ushiro-goshi", "https://www.youtube.com/watch?v=ORIYstuxYT8"),
    t("Utsuri-goshi", "https://www.youtube.com/watch?v=4pQd_bEnlf0"),
];

const MA_SUTEMI_WAZA: &[Technique] = &[
    t("Hikikomi-gaeshi", "https://www.youtube.com/watch?v=92zUYWBp5N8"),
    t("Sumi-gaeshi", "https://www.youtube.com/watch?v=5VhduA5xkbA"),
    t("Tawara-gaeshi", "https://www.youtube.com/watch?v=TmTWgrmViZc"),
    t("Tomoe-nage", "https://www.youtube.com/watch?v=880WbHvHv6A"),
    t("Ura-nage", "https://www.youtube.com/watch?v=Fgi9b8DJ5sQ"),
];

const OSAEKOMI_WAZA: &[Technique] = &[
    t("Kami-shiho-gatame", "https://www.youtube.com/watch?v=HFuMjOv0WN8"),
    t("Kata-gatame", "https://www.youtube.com/watch?v=zQR3IOXxO_Q"),
    t("Kesa-gatame", "https://www.youtube.com/watch?v=NDaQuJOFBYk"),
    t("Kuzure-kami-shiho-gatame", "https://www.youtube.com/watch?v=YUrogQWdwiY"),
    t("Kuzure-kesa-gatame", "https://www.youtube.com/watch?v=Q2fb9jaoUFQ"),
    t("Tate-shiho-gatame", "https://www.youtube.com/watch?v=55-rFmBx53g"),
    t("Uki-gatame", "https://www.youtube.com/watch?v=e_lAjik1SUM"),
    t("Ura-gatame", "https://www.youtube.com/watch?v=eeAHZB0v3XY"),
    t("Ushiro-kesa-gatame", "https://www.youtube.com/watch?v=SBapox2M2dE"),
    t("Yoko-shiho-gatame", "https://www.youtube.com/watch?v=TT7XJVSEQxA"),
];

const SHIME_WAZA: &[Technique] = &[
    t("Do-jime", "https://www.youtube.com/watch?v=D_0fFcoIbvY"),
    t("Gyaku-juji-jime", "https://www.youtube.com/watch?v=t3tQriIPdlI"),
    t("Hadaka-jime", "https://www.youtube.com/watch?v=9f0n8jez7iA"),
    t("Kata-juji-jime", "https://www.youtube.com/watch?v=3VZVUAmiMD8"),
    t("Kataha-jime", "https://www.youtube.com/watch?v=yaTGgRjnwB8"),
    t("Katate-jime", "https://www.youtube.com/watch?v=cHeIs-fSqwE"),
    t("Nami-juji-jime", "https://www.youtube.com/watch?v=k2cHry9HByQ"),
    t("Okuri-eri-jime", "https://www.youtube.com/watch?v=EiqyoVcIAi8"),
    t("Ryote-jime", "https://www.youtube.com/watch?v=-RHC4V7TQiY"),
    t("Sankaku-jime", "https://www.youtube.com/watch?v=lq1CUBRAm7s"),
    t("Sode-guruma-jime", "https://www.youtube.com/watch?v=E3nvQzClcAU"),
    t("Tsukkomi-jime", "https://www.youtube.com/watch?v=dKKpnD3eLcY"),
];

const TE_WAZA: &[Technique] = &[
    t("Ippon-seoi-nage", "https://www.youtube.com/watch?v=FQnOlCxo4oI"),
    t("Kata-guruma", "https://www.youtube.com/watch?v=cnHRhSy8yi4"),
    t("Kibisu-gaeshi", "https://www.youtube.com/watch?v=tJylJYfBliA"),
    t("Ko-uchi-gaeshi", "https://www.youtube.com/watch?v=_MWAdYi_LC4"),
    t("Kuchiki-taoshi", "https://www.youtube.com/watch?v=ZNL47q1aJNY"),
    t("Morote-gari", "https://www.youtube.com/watch?v=BHLQS4K85bs"),
    t("Obi-otoshi", "https://www.youtube.com/watch?v=ff8U2TVZIYI"),
    t("Obi-tori-gaeshi", "https://www.youtube.com/watch?v=bpc82SrunUU"),
    t("Seoi-nage", "https://www.youtube.com/watch?v=zIq0xI0ogxk"),
    t("Seoi-otoshi", "https://www.youtube.com/watch?v=vu1TMVNnq34"),
    t("Sukui-nage", "https://www.youtube.com/watch?v=vU6aJ2kFxoI"),
    t("Sumi-otoshi", "https://www.youtube.com/watch?v=lLU9wv52ni0"),
    t("Tai-otoshi", "https://www.youtube.com/watch?v=4x6S3Q-Ktv8"),
    t("Uchi-mata-sukashi", "https://www.youtube.com/watch?v=V-RS3uhtVWM"),
    t("Uki-otoshi", "https://www.youtube.com/watch?v=6H5tmncOY4Q"),
    t("Yama-arashi", "https://www.youtube.com/watch?v=MGlyKmSuzdc"),
];

const YOKO_SUTEMI_WAZA: &[Technique] = &[
    t("Daki-wakare", "https://www.youtube.com/watch?v=Hr0cOMGBDYo"),
    t("Hane-makikomi", "https://www.youtube.com/watch?v=6CRBGLGz9j8"),
    t("Harai-makikomi", "https://www.youtube.com/watch?v=VBaHzKaCXss"),
    t("Kani-basami", "https://www.youtube.com/watch?v=OR-HGHnarYc"),
    t("Kawazu-gake", "https://www.youtube.com/watch?v=w6G57bWACi0"),
    t("Ko-uchi-makikomi", "https://www.youtube.com/watch?v=_1eygIXLD_w"),
    t("O-soto-makikomi", "https://www.youtube.com/watch?v=DGDv2oMwmas"),
    t("Soto-makikomi", "https://www.youtube.com/watch?v=bWG9O1BVKtQ"),
    t("Tani-otoshi", "https://www.youtube.com/watch?v=3b9Me3Fohpk"),
    t("Uchi-makikomi", "https://www.youtube.com/watch?v=5BowcjduxVc"),
    t("Uchi-mata-makikomi", "https://www.youtube.com/watch?v=jZXENTLpJCI"),
    t("Uki-waza", "https://www.youtube.com/watch?v=weVOpJ63gII"),
    t("Yoko-gake", "https://www.youtube.com/watch?v=tP1Sj1uDfSo"),
    t("Yoko-guruma", "https://www.youtube.com/watch?v=MehP6I5cY2c"),
    t("Yoko-otoshi", "https://www.youtube.com/watch?v=MnNG67pF_a0"),
    t("Yoko-wakare", "https://www.youtube.com/watch?v=bp1tscHlePI"),
];
