use std::borrow::Cow;

use formwright_core::model::Model;

/// Name of `model` on the wire.
pub(crate) fn map_model(model: &Model) -> Cow<'_, str> {
    match model {
        Model::Groq(groq_model) => Cow::Borrowed(groq_model.id()),
        Model::Custom(custom) => Cow::Borrowed(custom.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use formwright_core::model::GroqModel;

    use super::*;

    #[test]
    fn maps_known_and_custom_models() {
        assert_eq!(map_model(&Model::default()), "llama3-70b-8192");
        assert_eq!(map_model(&GroqModel::Mixtral8x7b.into()), "mixtral-8x7b-32768");
        assert_eq!(map_model(&Model::Custom("gpt-4o-mini".into())), "gpt-4o-mini");
    }
}
