use crate::forms::{ImperativeForms, PastForms, PersonForms, PersonTable, VerbForms};
use crate::suffix::drop_chars;

/// Forms of "быть" that build the compound future, 1s..3p.
const FUTURE_AUXILIARY: [&str; 6] = ["буду", "будешь", "будет", "будем", "будете", "будут"];

/// The infinitive minus its final two characters ("-ть").
///
/// Nothing checks that the ending really is "-ть"; any word loses two chars.
pub fn stem(infinitive: &str) -> &str {
    drop_chars(infinitive, 2)
}

fn with_stem(stem: &str, endings: [&str; 3]) -> PersonForms {
    let [first, second, third] = endings.map(|ending| format!("{}{}", stem, ending));
    PersonForms {
        first,
        second,
        third,
    }
}

fn future(infinitive: &str) -> PersonTable {
    let [s1, s2, s3, p1, p2, p3] = FUTURE_AUXILIARY.map(|aux| format!("{} {}", aux, infinitive));
    PersonTable {
        singular: PersonForms {
            first: s1,
            second: s2,
            third: s3,
        },
        plural: PersonForms {
            first: p1,
            second: p2,
            third: p3,
        },
    }
}

/// Conjugates an infinitive with the regular first-conjugation pattern.
pub fn conjugate(infinitive: &str) -> VerbForms {
    let s = stem(infinitive);

    VerbForms {
        infinitive: infinitive.to_string(),
        present: PersonTable {
            singular: with_stem(s, ["ю", "ешь", "ет"]),
            plural: with_stem(s, ["ем", "ете", "ют"]),
        },
        past: PastForms {
            masculine: format!("{}л", s),
            feminine: format!("{}ла", s),
            neuter: format!("{}ло", s),
            plural: format!("{}ли", s),
        },
        future: future(infinitive),
        imperative: ImperativeForms {
            singular: format!("{}й", s),
            plural: format!("{}йте", s),
        },
    }
}
