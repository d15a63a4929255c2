use crate::models::{RelationshipKind as K, RelationshipRecord};

#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    records: &'static [RelationshipRecord],
}

impl Catalog {
    pub fn builtin() -> Self {
        Self { records: RECORDS }
    }

    pub fn records(&self) -> &'static [RelationshipRecord] {
        self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static RelationshipRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Order is significant: every lookup reports hits in this order, and the
// path resolver falls back to the first hit.
static RECORDS: &[RelationshipRecord] = &[
    // +2: paternal grandparents
    RelationshipRecord::new("Paternal grandfather", "爺爺", 2, K::Grandparents)
        .romanization("ye4 ye4")
        .notes("Father's father"),
    RelationshipRecord::new("Paternal grandmother", "嫲嫲", 2, K::Grandparents)
        .romanization("maa4 maa4")
        .notes("Father's mother"),

    // +2: maternal grandparents
    RelationshipRecord::new("Maternal grandfather", "外公", 2, K::Grandparents)
        .romanization("ngoi6 gung1")
        .notes("Mother's father"),
    RelationshipRecord::new("Maternal grandmother", "外婆", 2, K::Grandparents)
        .romanization("ngoi6 po4")
        .notes("Mother's mother"),

    // +3
    RelationshipRecord::new("Great grandfather (paternal)", "太爺", 3, K::Grandparents)
        .romanization("taai3 ye4")
        .notes("Father's father's father"),
    RelationshipRecord::new("Great grandmother (paternal)", "太嫲", 3, K::Grandparents)
        .romanization("taai3 maa4")
        .notes("Father's father's mother"),
    RelationshipRecord::new("Great grandfather (maternal)", "太外公", 3, K::Grandparents)
        .romanization("taai3 ngoi6 gung1")
        .notes("Mother's mother's father"),
    RelationshipRecord::new("Great grandmother (maternal)", "太外婆", 3, K::Grandparents)
        .romanization("taai3 ngoi6 po4")
        .notes("Mother's mother's mother"),

    // +1: parents, uncles and aunts
    RelationshipRecord::new("Father", "爸爸", 1, K::Parents)
        .romanization("baa4 baa1"),
    RelationshipRecord::new("Mother", "媽媽", 1, K::Parents)
        .romanization("maa1 maa1"),
    RelationshipRecord::new("Father's elder brother", "伯父", 1, K::UnclesAunts)
        .romanization("baak3 fu6")
        .notes("Paternal uncle (older than father)"),
    RelationshipRecord::new("Father's elder brother's wife", "伯母", 1, K::UnclesAunts)
        .romanization("baak3 mou5")
        .notes("Wife of father's elder brother"),
    RelationshipRecord::new("Father's younger brother", "叔父", 1, K::UnclesAunts)
        .romanization("suk1 fu6")
        .notes("Paternal uncle (younger than father)"),
    RelationshipRecord::new("Father's younger brother's wife", "嬸母", 1, K::UnclesAunts)
        .romanization("sam2 mou5")
        .notes("Wife of father's younger brother"),
    RelationshipRecord::new("Father's sister", "姑媽", 1, K::UnclesAunts)
        .romanization("gu1 maa1")
        .notes("Paternal aunt"),
    RelationshipRecord::new("Father's sister's husband", "姑丈", 1, K::UnclesAunts)
        .romanization("gu1 zoeng6")
        .notes("Husband of paternal aunt"),
    RelationshipRecord::new("Mother's brother", "舅父", 1, K::UnclesAunts)
        .romanization("kau5 fu6")
        .notes("Maternal uncle"),
    RelationshipRecord::new("Mother's brother's wife", "舅母", 1, K::UnclesAunts)
        .romanization("kau5 mou5")
        .notes("Wife of maternal uncle"),
    RelationshipRecord::new("Mother's sister", "姨媽", 1, K::UnclesAunts)
        .romanization("ji4 maa1")
        .notes("Maternal aunt"),
    RelationshipRecord::new("Mother's sister's husband", "姨丈", 1, K::UnclesAunts)
        .romanization("ji4 zoeng6")
        .notes("Husband of maternal aunt"),

    // 0: siblings
    RelationshipRecord::new("Elder brother", "哥哥", 0, K::Siblings)
        .romanization("go1 go1"),
    RelationshipRecord::new("Elder sister", "姐姐", 0, K::Siblings)
        .romanization("ze2 ze2"),
    RelationshipRecord::new("Younger brother", "弟弟", 0, K::Siblings)
        .romanization("dai6 dai2"),
    RelationshipRecord::new("Younger sister", "妹妹", 0, K::Siblings)
        .romanization("mui6 mui2"),

    // 0: 堂 cousins, father's brothers' children
    RelationshipRecord::new("Elder male cousin (father's brother's son)", "堂兄", 0, K::Cousins)
        .romanization("tong4 hing1")
        .notes("Father's brother's son who is older than you"),
    RelationshipRecord::new("Younger male cousin (father's brother's son)", "堂弟", 0, K::Cousins)
        .romanization("tong4 dai6")
        .notes("Father's brother's son who is younger than you"),
    RelationshipRecord::new("Elder female cousin (father's brother's daughter)", "堂姐", 0, K::Cousins)
        .romanization("tong4 ze2")
        .notes("Father's brother's daughter who is older than you"),
    RelationshipRecord::new("Younger female cousin (father's brother's daughter)", "堂妹", 0, K::Cousins)
        .romanization("tong4 mui6")
        .notes("Father's brother's daughter who is younger than you"),

    // 0: 表 cousins, everyone else's children
    RelationshipRecord::new("Elder male cousin (father's sister's son)", "表兄", 0, K::Cousins)
        .romanization("biu2 hing1")
        .notes("Father's sister's son who is older than you"),
    RelationshipRecord::new("Younger male cousin (father's sister's son)", "表弟", 0, K::Cousins)
        .romanization("biu2 dai6")
        .notes("Father's sister's son who is younger than you"),
    RelationshipRecord::new("Elder female cousin (father's sister's daughter)", "表姐", 0, K::Cousins)
        .romanization("biu2 ze2")
        .notes("Father's sister's daughter who is older than you"),
    RelationshipRecord::new("Younger female cousin (father's sister's daughter)", "表妹", 0, K::Cousins)
        .romanization("biu2 mui6")
        .notes("Father's sister's daughter who is younger than you"),
    RelationshipRecord::new("Elder male cousin (mother's brother's son)", "表兄", 0, K::Cousins)
        .romanization("biu2 hing1")
        .notes("Mother's brother's son who is older than you"),
    RelationshipRecord::new("Younger male cousin (mother's brother's son)", "表弟", 0, K::Cousins)
        .romanization("biu2 dai6")
        .notes("Mother's brother's son who is younger than you"),
    RelationshipRecord::new("Elder female cousin (mother's brother's daughter)", "表姐", 0, K::Cousins)
        .romanization("biu2 ze2")
        .notes("Mother's brother's daughter who is older than you"),
    RelationshipRecord::new("Younger female cousin (mother's brother's daughter)", "表妹", 0, K::Cousins)
        .romanization("biu2 mui6")
        .notes("Mother's brother's daughter who is younger than you"),
    RelationshipRecord::new("Elder male cousin (mother's sister's son)", "表兄", 0, K::Cousins)
        .romanization("biu2 hing1")
        .notes("Mother's sister's son who is older than you"),
    RelationshipRecord::new("Younger male cousin (mother's sister's son)", "表弟", 0, K::Cousins)
        .romanization("biu2 dai6")
        .notes("Mother's sister's son who is younger than you"),
    RelationshipRecord::new("Elder female cousin (mother's sister's daughter)", "表姐", 0, K::Cousins)
        .romanization("biu2 ze2")
        .notes("Mother's sister's daughter who is older than you"),
    RelationshipRecord::new("Younger female cousin (mother's sister's daughter)", "表妹", 0, K::Cousins)
        .romanization("biu2 mui6")
        .notes("Mother's sister's daughter who is younger than you"),

    // 0: cousins' spouses
    RelationshipRecord::new("Male cousin's wife (father's brother's son's wife)", "堂嫂", 0, K::Cousins)
        .romanization("tong4 sou2")
        .notes("Elder paternal male cousin's wife"),
    RelationshipRecord::new("Male cousin's wife (father's brother's son's wife)", "堂弟媳", 0, K::Cousins)
        .romanization("tong4 dai6 sik1")
        .notes("Younger paternal male cousin's wife"),
    RelationshipRecord::new("Female cousin's husband (father's brother's daughter's husband)", "堂姐夫", 0, K::Cousins)
        .romanization("tong4 ze2 fu1")
        .notes("Elder paternal female cousin's husband"),
    RelationshipRecord::new("Female cousin's husband (father's brother's daughter's husband)", "堂妹夫", 0, K::Cousins)
        .romanization("tong4 mui6 fu1")
        .notes("Younger paternal female cousin's husband"),
    RelationshipRecord::new("Male cousin's wife (father's sister's/mother's sibling's son's wife)", "表嫂", 0, K::Cousins)
        .romanization("biu2 sou2")
        .notes("Elder 'biu' male cousin's wife"),
    RelationshipRecord::new("Male cousin's wife (father's sister's/mother's sibling's son's wife)", "表弟媳", 0, K::Cousins)
        .romanization("biu2 dai6 sik1")
        .notes("Younger 'biu' male cousin's wife"),
    RelationshipRecord::new("Female cousin's husband (father's sister's/mother's sibling's daughter's husband)", "表姐夫", 0, K::Cousins)
        .romanization("biu2 ze2 fu1")
        .notes("Elder 'biu' female cousin's husband"),
    RelationshipRecord::new("Female cousin's husband (father's sister's/mother's sibling's daughter's husband)", "表妹夫", 0, K::Cousins)
        .romanization("biu2 mui6 fu1")
        .notes("Younger 'biu' female cousin's husband"),

    // -1: cousins' children
    RelationshipRecord::new("Paternal male cousin's son", "堂侄", -1, K::Cousins)
        .romanization("tong4 zat6")
        .notes("Son of father's brother's son (your male paternal cousin)"),
    RelationshipRecord::new("Paternal male cousin's daughter", "堂侄女", -1, K::Cousins)
        .romanization("tong4 zat6 neoi5")
        .notes("Daughter of father's brother's son (your male paternal cousin)"),
    RelationshipRecord::new("Paternal female cousin's son", "堂外甥", -1, K::Cousins)
        .romanization("tong4 ngoi6 saang1")
        .notes("Son of father's brother's daughter (your female paternal cousin)"),
    RelationshipRecord::new("Paternal female cousin's daughter", "堂外甥女", -1, K::Cousins)
        .romanization("tong4 ngoi6 saang1 neoi5")
        .notes("Daughter of father's brother's daughter (your female paternal cousin)"),
    RelationshipRecord::new("Other male cousin's son", "表侄", -1, K::Cousins)
        .romanization("biu2 zat6")
        .notes("Son of your male 'biu' cousin"),
    RelationshipRecord::new("Other male cousin's daughter", "表侄女", -1, K::Cousins)
        .romanization("biu2 zat6 neoi5")
        .notes("Daughter of your male 'biu' cousin"),
    RelationshipRecord::new("Other female cousin's son", "表外甥", -1, K::Cousins)
        .romanization("biu2 ngoi6 saang1")
        .notes("Son of your female 'biu' cousin"),
    RelationshipRecord::new("Other female cousin's daughter", "表外甥女", -1, K::Cousins)
        .romanization("biu2 ngoi6 saang1 neoi5")
        .notes("Daughter of your female 'biu' cousin"),

    // 0: spouse and siblings-in-law
    RelationshipRecord::new("Husband", "老公", 0, K::Spouse)
        .romanization("lou5 gung1")
        .notes("Spouse (male)"),
    RelationshipRecord::new("Wife", "老婆", 0, K::Spouse)
        .romanization("lou5 po4")
        .notes("Spouse (female)"),
    RelationshipRecord::new("Brother's wife", "嫂嫂", 0, K::InLaws)
        .romanization("sou2 sou2")
        .notes("Elder brother's wife"),
    RelationshipRecord::new("Younger brother's wife", "弟婦", 0, K::Extended)
        .romanization("dai6 fu5")
        .notes("Younger brother's wife"),
    RelationshipRecord::new("Sister's husband", "姐夫", 0, K::InLaws)
        .romanization("ze2 fu1")
        .notes("Elder sister's husband"),
    RelationshipRecord::new("Younger sister's husband", "妹夫", 0, K::Extended)
        .romanization("mui6 fu1")
        .notes("Younger sister's husband"),
    RelationshipRecord::new("Husband's elder brother", "大伯", 0, K::Extended)
        .romanization("daai6 baak3")
        .notes("Husband's elder brother"),
    RelationshipRecord::new("Husband's elder brother's wife", "大嫂", 0, K::Extended)
        .romanization("daai6 sou2")
        .notes("Wife of husband's elder brother"),
    RelationshipRecord::new("Husband's younger brother", "小叔", 0, K::Extended)
        .romanization("siu2 suk1")
        .notes("Husband's younger brother"),
    RelationshipRecord::new("Husband's younger brother's wife", "小嬸", 0, K::Extended)
        .romanization("siu2 sam2")
        .notes("Wife of husband's younger brother"),
    RelationshipRecord::new("Husband's sister", "姑仔", 0, K::Extended)
        .romanization("gu1 zai2")
        .notes("Sister of husband"),
    RelationshipRecord::new("Husband's sister's husband", "姑爺", 0, K::Extended)
        .romanization("gu1 ye4")
        .notes("Husband of husband's sister"),
    RelationshipRecord::new("Wife's brother", "舅仔", 0, K::Extended)
        .romanization("kau5 zai2")
        .notes("Brother of wife"),
    RelationshipRecord::new("Wife's brother's wife", "舅弟媳婦", 0, K::Extended)
        .romanization("kau5 dai6 sik1 fu5")
        .notes("Wife of wife's brother"),
    RelationshipRecord::new("Wife's sister", "姨仔", 0, K::Extended)
        .romanization("ji4 zai2")
        .notes("Sister of wife"),
    RelationshipRecord::new("Wife's sister's husband", "姨爺", 0, K::Extended)
        .romanization("ji4 ye4")
        .notes("Husband of wife's sister"),

    // +1: parents-in-law
    RelationshipRecord::new("Father-in-law (husband's father)", "家公", 1, K::SpousesFamily)
        .romanization("gaa1 gung1")
        .notes("Husband's father"),
    RelationshipRecord::new("Mother-in-law (husband's mother)", "家婆", 1, K::SpousesFamily)
        .romanization("gaa1 po4")
        .notes("Husband's mother"),
    RelationshipRecord::new("Father-in-law (wife's father)", "岳父", 1, K::SpousesFamily)
        .romanization("ngok6 fu6")
        .notes("Wife's father"),
    RelationshipRecord::new("Mother-in-law (wife's mother)", "岳母", 1, K::SpousesFamily)
        .romanization("ngok6 mou5")
        .notes("Wife's mother"),

    // -1: children, nephews and nieces
    RelationshipRecord::new("Son", "兒子", -1, K::Children)
        .romanization("ji4 zi2"),
    RelationshipRecord::new("Daughter", "女兒", -1, K::Children)
        .romanization("neoi5 ji4"),
    RelationshipRecord::new("Nephew (brother's son)", "侄子", -1, K::NephewsNieces)
        .romanization("zat6 zi2")
        .notes("Son of your brother"),
    RelationshipRecord::new("Niece (brother's daughter)", "侄女", -1, K::NephewsNieces)
        .romanization("zat6 neoi5")
        .notes("Daughter of your brother"),
    RelationshipRecord::new("Nephew (sister's son)", "外甥", -1, K::NephewsNieces)
        .romanization("ngoi6 saang1")
        .notes("Son of your sister"),
    RelationshipRecord::new("Niece (sister's daughter)", "外甥女", -1, K::NephewsNieces)
        .romanization("ngoi6 saang1 neoi5")
        .notes("Daughter of your sister"),

    // -1: children-in-law
    RelationshipRecord::new("Son-in-law", "女婿", -1, K::Extended)
        .romanization("neoi5 sai3")
        .notes("Daughter's husband"),
    RelationshipRecord::new("Daughter-in-law", "媳婦", -1, K::Extended)
        .romanization("sik1 fu5")
        .notes("Son's wife"),

    // -2
    RelationshipRecord::new("Grandson (son's son)", "孫子", -2, K::Extended)
        .romanization("syun1 zi2"),
    RelationshipRecord::new("Granddaughter (son's daughter)", "孫女", -2, K::Extended)
        .romanization("syun1 neoi5"),
    RelationshipRecord::new("Grandson (daughter's son)", "外孫", -2, K::Extended)
        .romanization("ngoi6 syun1"),
    RelationshipRecord::new("Granddaughter (daughter's daughter)", "外孫女", -2, K::Extended)
        .romanization("ngoi6 syun1 neoi5"),

    // -2: grandchildren's spouses
    RelationshipRecord::new("Grandson's wife", "孫媳婦", -2, K::Extended)
        .romanization("syun1 sik1 fu5")
        .notes("Wife of son's son"),
    RelationshipRecord::new("Granddaughter's husband", "孫女婿", -2, K::Extended)
        .romanization("syun1 neoi5 sai3")
        .notes("Husband of son's daughter"),
    RelationshipRecord::new("Daughter's son's wife", "外孫媳婦", -2, K::Extended)
        .romanization("ngoi6 syun1 sik1 fu5")
        .notes("Wife of daughter's son"),
    RelationshipRecord::new("Daughter's daughter's husband", "外孫女婿", -2, K::Extended)
        .romanization("ngoi6 syun1 neoi5 sai3")
        .notes("Husband of daughter's daughter"),

    // -3
    RelationshipRecord::new("Great grandson", "曾孫", -3, K::Extended)
        .romanization("zang1 syun1"),
    RelationshipRecord::new("Great granddaughter", "曾孫女", -3, K::Extended)
        .romanization("zang1 syun1 neoi5"),

    // -3: great grandchildren's spouses
    RelationshipRecord::new("Great grandson's wife", "曾孫媳婦", -3, K::Extended)
        .romanization("zang1 syun1 sik1 fu5")
        .notes("Wife of great grandson"),
    RelationshipRecord::new("Great granddaughter's husband", "曾孫女婿", -3, K::Extended)
        .romanization("zang1 syun1 neoi5 sai3")
        .notes("Husband of great granddaughter"),
];
