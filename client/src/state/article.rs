//! Article display settings: option lists and the applied/draft state shape.
//!
//! DESIGN
//! ======
//! Every field is a `Copy` handle into a fixed `'static` option list, so a
//! state value can never hold a choice the form does not offer and handing a
//! state across the form/shell boundary is a plain value copy.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

/// One selectable value for a display field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArticleOption {
    /// CSS value applied through the field's custom property.
    pub value: &'static str,
    /// Human-readable label shown in controls.
    pub label: &'static str,
    /// Class used to preview the option in its own control (font face, swatch).
    pub class_name: Option<&'static str>,
    /// Class applied to the option row inside a dropdown.
    pub option_class_name: Option<&'static str>,
}

impl ArticleOption {
    const fn plain(value: &'static str, label: &'static str) -> Self {
        Self { value, label, class_name: None, option_class_name: None }
    }

    const fn styled(
        value: &'static str,
        label: &'static str,
        class_name: &'static str,
        option_class_name: Option<&'static str>,
    ) -> Self {
        Self { value, label, class_name: Some(class_name), option_class_name }
    }
}

pub const FONT_FAMILY_OPTIONS: &[ArticleOption] = &[
    ArticleOption::styled("Open Sans", "Open Sans", "font-open-sans", None),
    ArticleOption::styled("Ubuntu", "Ubuntu", "font-ubuntu", None),
    ArticleOption::styled("Cormorant Garamond", "Cormorant Garamond", "font-cormorant-garamond", None),
    ArticleOption::styled("Days One", "Days One", "font-days-one", None),
    ArticleOption::styled("Merriweather", "Merriweather", "font-merriweather", None),
    ArticleOption::styled("PT Mono", "PT Mono", "font-pt-mono", None),
];

pub const FONT_SIZE_OPTIONS: &[ArticleOption] = &[
    ArticleOption::plain("18px", "18px"),
    ArticleOption::plain("24px", "24px"),
    ArticleOption::plain("38px", "38px"),
];

pub const FONT_COLORS: &[ArticleOption] = &[
    ArticleOption::styled("#000000", "Black", "font-black", Some("option-black")),
    ArticleOption::styled("#FFFFFF", "White", "font-white", Some("option-white")),
    ArticleOption::styled("#C4C4C4", "Gray", "font-gray", Some("option-gray")),
    ArticleOption::styled("#FEAFE8", "Pink", "font-pink", Some("option-pink")),
    ArticleOption::styled("#FD24AF", "Fuchsia", "font-fuchsia", Some("option-fuchsia")),
    ArticleOption::styled("#FFC802", "Yellow", "font-yellow", Some("option-yellow")),
    ArticleOption::styled("#80D994", "Green", "font-green", Some("option-green")),
    ArticleOption::styled("#6FC1FD", "Blue", "font-blue", Some("option-blue")),
    ArticleOption::styled("#5F2EBF", "Purple", "font-purple", Some("option-purple")),
];

pub const BACKGROUND_COLORS: &[ArticleOption] = &[
    ArticleOption::styled("#FFFFFF", "White", "bg-white", Some("option-white")),
    ArticleOption::styled("#000000", "Black", "bg-black", Some("option-black")),
    ArticleOption::styled("#C4C4C4", "Gray", "bg-gray", Some("option-gray")),
    ArticleOption::styled("#FEAFE8", "Pink", "bg-pink", Some("option-pink")),
    ArticleOption::styled("#FD24AF", "Fuchsia", "bg-fuchsia", Some("option-fuchsia")),
    ArticleOption::styled("#FFC802", "Yellow", "bg-yellow", Some("option-yellow")),
    ArticleOption::styled("#80D994", "Green", "bg-green", Some("option-green")),
    ArticleOption::styled("#6FC1FD", "Blue", "bg-blue", Some("option-blue")),
    ArticleOption::styled("#5F2EBF", "Purple", "bg-purple", Some("option-purple")),
];

pub const CONTENT_WIDTHS: &[ArticleOption] = &[
    ArticleOption::styled("1394px", "Wide", "width-wide", Some("option-wide")),
    ArticleOption::styled("948px", "Narrow", "width-narrow", Some("option-narrow")),
];

/// The five independently selectable display fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArticleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ArticleField {
    /// All fields, in form order.
    pub const ALL: [Self; 5] = [
        Self::FontFamily,
        Self::FontSize,
        Self::FontColor,
        Self::BackgroundColor,
        Self::ContentWidth,
    ];

    /// Fixed option list the field draws from.
    pub fn options(self) -> &'static [ArticleOption] {
        match self {
            Self::FontFamily => FONT_FAMILY_OPTIONS,
            Self::FontSize => FONT_SIZE_OPTIONS,
            Self::FontColor => FONT_COLORS,
            Self::BackgroundColor => BACKGROUND_COLORS,
            Self::ContentWidth => CONTENT_WIDTHS,
        }
    }

    /// Control title shown above the field in the settings form.
    pub fn title(self) -> &'static str {
        match self {
            Self::FontFamily => "Font",
            Self::FontSize => "Font size",
            Self::FontColor => "Font color",
            Self::BackgroundColor => "Background color",
            Self::ContentWidth => "Content width",
        }
    }

    /// CSS custom property the shell sets for this field.
    pub fn css_var(self) -> &'static str {
        match self {
            Self::FontFamily => "--font-family",
            Self::FontSize => "--font-size",
            Self::FontColor => "--font-color",
            Self::BackgroundColor => "--bg-color",
            Self::ContentWidth => "--container-width",
        }
    }

    /// Look up an option of this field by its CSS value.
    ///
    /// Controls report the raw `value` string of the chosen element; this maps
    /// it back onto the fixed list.
    pub fn find(self, value: &str) -> Option<ArticleOption> {
        self.options().iter().copied().find(|opt| opt.value == value)
    }
}

/// Complete set of display settings for the article view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArticleState {
    pub font_family: ArticleOption,
    pub font_size: ArticleOption,
    pub font_color: ArticleOption,
    pub background_color: ArticleOption,
    pub content_width: ArticleOption,
}

impl ArticleState {
    /// Initial applied state and the form's reset target.
    pub const DEFAULT: Self = Self {
        font_family: FONT_FAMILY_OPTIONS[0],
        font_size: FONT_SIZE_OPTIONS[0],
        font_color: FONT_COLORS[0],
        background_color: BACKGROUND_COLORS[0],
        content_width: CONTENT_WIDTHS[0],
    };

    pub fn get(&self, field: ArticleField) -> ArticleOption {
        match field {
            ArticleField::FontFamily => self.font_family,
            ArticleField::FontSize => self.font_size,
            ArticleField::FontColor => self.font_color,
            ArticleField::BackgroundColor => self.background_color,
            ArticleField::ContentWidth => self.content_width,
        }
    }

    pub fn set(&mut self, field: ArticleField, option: ArticleOption) {
        let slot = match field {
            ArticleField::FontFamily => &mut self.font_family,
            ArticleField::FontSize => &mut self.font_size,
            ArticleField::FontColor => &mut self.font_color,
            ArticleField::BackgroundColor => &mut self.background_color,
            ArticleField::ContentWidth => &mut self.content_width,
        };
        *slot = option;
    }

    /// `(custom property, value)` pairs for every field, in form order.
    pub fn style_vars(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        ArticleField::ALL
            .into_iter()
            .map(|field| (field.css_var(), self.get(field).value))
    }

    /// Inline `style` attribute value carrying every custom property.
    pub fn inline_style(&self) -> String {
        self.style_vars()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ArticleState {
    fn default() -> Self {
        Self::DEFAULT
    }
}
