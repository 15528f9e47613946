//! Fixed lookup tables
//!
//! Order matters: simulations index these by seed-derived values, so
//! reordering an entry changes every output that lands on it.

/// Card suits in deck order
pub const SUITS: [&str; 4] = ["Spades", "Hearts", "Diamonds", "Clubs"];

pub const SUIT_SYMBOLS: [char; 4] = ['♠', '♥', '♦', '♣'];

/// Card ranks in deck order, ace low
pub const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

pub const RANK_NAMES: [&str; 13] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

/// Major arcana, 0 (The Fool) through 21 (The World)
pub const TAROT_MAJOR: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

pub const ZODIAC_SIGNS: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

pub const FORTUNES: [&str; 12] = [
    "A pleasant surprise is waiting for you.",
    "Your hard work will soon pay off.",
    "An old friend will bring good news.",
    "Now is the time to try something new.",
    "Patience is your ally this week.",
    "A small act of kindness will return to you twofold.",
    "You will find what you lost in an unexpected place.",
    "Adventure is on the horizon.",
    "Trust your instincts on the next decision.",
    "Good things come to those who plan.",
    "A change of scenery will do you good.",
    "Someone is grateful for your help.",
];

/// The twenty classic answers: ten affirmative, five non-committal, five negative
pub const MAGIC_EIGHT_BALL: [&str; 20] = [
    "It is certain.",
    "It is decidedly so.",
    "Without a doubt.",
    "Yes definitely.",
    "You may rely on it.",
    "As I see it, yes.",
    "Most likely.",
    "Outlook good.",
    "Yes.",
    "Signs point to yes.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "Cannot predict now.",
    "Concentrate and ask again.",
    "Don't count on it.",
    "My reply is no.",
    "My sources say no.",
    "Outlook not so good.",
    "Very doubtful.",
];

/// Bingo columns, 15 numbers each
pub const BINGO_LETTERS: [char; 5] = ['B', 'I', 'N', 'G', 'O'];

pub const BINGO_MAX: i64 = 75;

/// Red pockets of a single-zero wheel
pub const ROULETTE_RED: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

pub const ROULETTE_MAX: i64 = 36;
