//! Spanish (es-MX)

use super::keys::{
    ActionTexts, BrowserCaptionTexts, CommonTexts, HelpActionTexts, HelpTexts, HintTexts,
    HomeTexts, KeyNames, ModalTexts, PromptTexts, ResultsTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "KYB Explorer",
        confirm: "Aceptar",
        cancel: "Cancelar",
        close: "Cerrar",
        quit: "Salir",
        error: "Error",
        back: "Regresar",
        next: "Siguiente",
        prev: "Anterior",
    },

    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            sub_lists: "1/2",
        },
        actions: ActionTexts {
            start: "Iniciar",
            navigate: "Navegar",
            switch_panel: "Cambiar panel",
            drill: "Sublistas",
            back: "Regresar",
            help: "Ayuda",
            submit: "Enviar",
        },
    },

    home: HomeTexts {
        welcome_title: "Conozca a su Negocio",
        welcome_message: "Consulte una empresa y su marca en los registros públicos.",
        start_hint: "Presione Enter para iniciar una búsqueda",
        session_in_progress: "Búsqueda en curso...",
    },

    prompts: PromptTexts {
        company: "Bienvenido a su KYB VR\nPor favor introduzca la Razón Social:",
        company_required: "Lo sentimos pero la razón Social es necesaria para la busqueda",
        rfc: "Introduzca el RFC:",
        brand: "Introduzca la marca:",
    },

    browser: BrowserCaptionTexts {
        results_title: "Resultados KYB",
        company_title: "Registro de empresas",
        brand_title: "Registro de marcas",
        company_record: "Empresa",
        brand_record: "Marca",
        procedures: "Trámites",
        products_and_services: "Productos y servicios",
        back: "Regresar",
        no_brand_query: "No se realizó búsqueda de marca",
        lookup_failed: "La consulta falló",
        no_match: "No se encontraron coincidencias",
        no_records: "La consulta no devolvió registros",
        unexpected_status: "Estado inesperado del registro",
    },

    results: ResultsTexts {
        header: "Búsqueda",
        not_given: "-",
        company_field: "Razón Social",
        rfc_field: "RFC",
        brand_field: "Marca",
    },

    status: StatusTexts {
        config_fallback: "No se pudo leer la configuración, se usan valores por defecto",
        session_running: "Ya hay una búsqueda en curso",
        session_cancelled: "Búsqueda cancelada",
        required_missing: "Búsqueda cancelada: la Razón Social es necesaria",
        channel_failed: "Búsqueda cancelada: no se pudo mostrar la pregunta",
        build_failed: "No se pudieron mostrar los resultados",
    },

    modal: ModalTexts {
        prompt_title: "KYB",
        input_label: "Respuesta",
        notice_title: "Aviso",
    },

    help: HelpTexts {
        title: "Ayuda",
        global_shortcuts: "Atajos globales",
        results_shortcuts: "Atajos de resultados",
        close_hint: "Presione Esc para cerrar la ayuda",
        actions: HelpActionTexts {
            start_session: "Iniciar una búsqueda",
            next_prev: "Registro siguiente / anterior",
            switch_panel: "Cambiar panel de registro",
            procedures: "Trámites / regresar",
            products: "Productos y servicios / regresar",
            back: "Salir de la sublista / cerrar resultados",
            quit: "Salir",
        },
    },
};
