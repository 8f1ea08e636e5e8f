use khidma_api::Locales;

fn load() -> Locales {
    let mut locales = Locales::new("config/locales").expect("locale files");
    locales.set_default("ar").expect("default locale");
    locales
}

#[test]
fn both_languages_are_loaded() {
    let locales = load();
    let mut available = locales.available();
    available.sort();
    assert_eq!(available, vec!["ar", "fr"]);
}

#[test]
fn nested_keys_are_flattened() {
    let locales = load();
    assert_eq!(locales.t("post.title_required"), "يرجى إدخال عنوان الوظيفة أولاً");
    assert_eq!(
        locales.translate("fr", "post.title_required").unwrap(),
        "Veuillez entrer le titre du poste"
    );
}

#[test]
fn unknown_locale_falls_back_to_the_default() {
    let locales = load();
    assert_eq!(locales.t_in(Some("en"), "post.published"), "تم نشر الإعلان بنجاح!");
    assert_eq!(locales.t_in(None, "post.published"), "تم نشر الإعلان بنجاح!");
    assert_eq!(locales.t_in(Some("fr"), "post.published"), "Offre publiée avec succès !");
}

#[test]
fn missing_keys_fall_back_to_the_key_itself() {
    let locales = load();
    assert_eq!(locales.t("does.not.exist"), "does.not.exist");
}
