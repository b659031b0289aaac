use crate::models::{LifePathNumber, NumberMeaning};

const fn meaning(title: &'static str, description: &'static str, traits: &'static str) -> NumberMeaning {
    NumberMeaning { title, description, traits }
}

/// Interpretations of the single-digit life path numbers, indexed by `number - 1`
///
/// Master numbers have no entry.
pub const MEANINGS: [NumberMeaning; 9] = [
    meaning(
        "Единица",
        "Лидер, первопроходец, независимый",
        "Амбициозность, инициативность, уверенность в себе",
    ),
    meaning(
        "Двойка",
        "Дипломат, миротворец, партнер",
        "Гармония, сотрудничество, чувствительность",
    ),
    meaning(
        "Тройка",
        "Творец, коммуникатор, оптимист",
        "Креативность, общительность, жизнерадостность",
    ),
    meaning(
        "Четверка",
        "Строитель, организатор, практик",
        "Надежность, упорство, структурированность",
    ),
    meaning(
        "Пятерка",
        "Искатель приключений, свободолюбивый",
        "Любознательность, адаптивность, энергичность",
    ),
    meaning(
        "Шестерка",
        "Заботливый, ответственный, семьянин",
        "Любовь, забота, гармония в отношениях",
    ),
    meaning(
        "Семерка",
        "Мыслитель, исследователь, духовный",
        "Мудрость, аналитический ум, интуиция",
    ),
    meaning(
        "Восьмерка",
        "Материалист, бизнесмен, власть",
        "Амбициозность, успех, материальное процветание",
    ),
    meaning(
        "Девятка",
        "Гуманист, идеалист, просветитель",
        "Сострадание, широта взглядов, альтруизм",
    ),
];

/// Look up the interpretation of a life path number
///
/// Returns `None` for master numbers.
#[inline]
pub fn meaning_for(number: LifePathNumber) -> Option<&'static NumberMeaning> {
    match number.value() {
        v @ 1..=9 => MEANINGS.get(usize::from(v) - 1),
        _ => None,
    }
}

/// Every defined meaning in ascending order
pub fn all_meanings() -> impl Iterator<Item = (LifePathNumber, &'static NumberMeaning)> {
    (1..=9u8).filter_map(|v| {
        let number = LifePathNumber::try_from(v).ok()?;
        meaning_for(number).map(|m| (number, m))
    })
}
