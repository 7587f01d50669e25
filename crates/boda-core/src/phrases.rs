//! "We're getting married" in many languages, for the hero marquee.
//!
//! Euskera and Castellano sit in the middle of the list so they scroll
//! through the centre of the marquee.

const BEFORE_CENTER: &[&str] = &[
    "We're getting married",
    "Nous nous marions",
    "Wir heiraten",
    "Ci sposiamo",
    "Vamos casar-nos",
    "We are getting married",
    "Vi gifter oss",
    "Vi gifter os",
    "We trouwen",
    "Pobierzemy się",
    "Vamos nos casar",
    "Мы женимся",
    "Παντρευόμαστε",
    "Házasodunk",
    "Vom căsători",
    "Budeme sa brať",
    "Vjenčavamo se",
    "Vzameva se",
    "Mi se ženimo",
    "Casaremos",
    "Nos vamos a casar",
    "Me casaré",
    "S'ha de casar",
    "Ens casem",
    "Casar-nos-hemos",
    "Casarémonos",
    "We get married",
    "We are to be married",
];

const CENTER: &[&str] = &[
    "Ezkonduko gara",
    "Nos casamos",
    "Ezkonduko gara",
    "Nos casamos",
];

const AFTER_CENTER: &[&str] = &[
    "نحن نتزوج",
    "我们结婚了",
    "私たちは結婚します",
    "우리 결혼해요",
    "เราแต่งงานกัน",
    "Chúng tôi kết hôn",
    "Kami ay ikakasal",
    "Kami menikah",
    "אנחנו מתחתנים",
    "हम शादी कर रहे हैं",
    "আমরা বিয়ে করছি",
    "Biz evleniyoruz",
    "Vi skal gifte oss",
    "Vi gifter oss",
    "Meillä on häät",
    "Vi erum að gifta okkur",
    "Táimid ag pósadh",
    "Rydyn ni'n priodi",
    "Siamo per sposarci",
    "Nous allons nous marier",
    "Wir werden heiraten",
    "We're getting married",
    "Nos casamos",
    "Ezkonduko gara",
    "We're getting married",
    "Nos casamos",
    "Ezkonduko gara",
];

/// All marquee phrases in display order.
pub fn we_get_married() -> impl Iterator<Item = &'static str> {
    BEFORE_CENTER
        .iter()
        .chain(CENTER)
        .chain(AFTER_CENTER)
        .copied()
}
