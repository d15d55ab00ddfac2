//! Fixed stopword lists

/// Japanese particles, auxiliaries and other high-frequency function words
pub static JAPANESE_STOPWORDS: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる", "も",
    "する", "から", "な", "こと", "として", "い", "や", "れる", "など", "なっ", "ない", "この",
    "ため", "その", "あっ", "よう", "また", "もの", "という", "あり", "まで", "られ", "なる", "へ",
    "か", "だ", "これ", "によって", "により", "おり", "より", "による", "ず", "なり", "られる",
    "において", "ば", "なかっ", "なく", "しかし", "について", "せ", "だっ", "できる", "それ",
    "う", "ので", "なお", "のみ", "でき", "き", "つ", "における", "および", "いう", "さらに",
    "でも", "ら", "たり", "たち", "ます", "ん", "なら", "に対して", "せる", "及び", "これら",
    "とき", "では", "にて", "ほか", "ながら", "うち", "そして", "とともに", "ただし", "それぞれ",
    "または", "お", "ほど", "ものの", "に対する", "といった", "です", "とも", "ところ", "ここ",
];

/// English function words
pub static ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "being", "but", "by", "can", "could", "did",
    "do", "does", "for", "from", "had", "has", "have", "he", "her", "his", "how", "if", "in",
    "into", "is", "it", "its", "me", "my", "no", "not", "of", "on", "or", "our", "she", "so",
    "than", "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
    "to", "too", "up", "us", "very", "was", "we", "were", "what", "when", "where", "which", "who",
    "why", "will", "with", "would", "you", "your",
];

pub fn is_japanese_stopword(word: &str) -> bool {
    JAPANESE_STOPWORDS.contains(&word)
}

pub fn is_english_stopword(word: &str) -> bool {
    ENGLISH_STOPWORDS.contains(&word)
}
